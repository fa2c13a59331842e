pub mod channel;
pub mod color;
pub mod config;
pub mod field;
pub mod forwarder;
pub mod grid;
pub mod messages;
pub mod origin;
pub mod random;
pub mod surface;

pub use channel::{ChannelError, InProcessChannel, NotificationChannel};
pub use color::{Color, Palette, FLOWER_COLORS, GRASS_SHADES};
pub use config::{
    default_config, get_config, FieldConfig, ForwarderConfig, FIELD_CONFIGS, TRINKET_CONFIG,
};
pub use field::{FieldRenderer, Flower};
pub use forwarder::LogForwarder;
pub use grid::{cell_origins, snap_to_grid, Block, GridPoint};
pub use messages::{HostMessage, LogLevel};
pub use origin::Origin;
pub use random::{IndexSource, ScriptedIndices};
pub use surface::{DrawSurface, RasterSurface};
