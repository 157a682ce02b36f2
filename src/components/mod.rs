pub mod backdrop;
pub mod card_header;
pub mod host_page;
pub mod particle_layer;
pub mod readouts;
pub mod weather_card;
pub mod weather_icon;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use card_header::{CardHeader, CardHeaderProps};
pub use host_page::{HostPage, HostPageProps};
pub use particle_layer::{ParticleLayer, ParticleLayerProps};
pub use readouts::{DetailTiles, DetailTilesProps, TemperatureReadout, TemperatureReadoutProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
pub use weather_icon::{WeatherIconProps, WeatherIconView};
