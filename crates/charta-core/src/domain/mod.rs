pub mod artist;
pub mod popularity;
pub mod region;
pub mod sample;
pub mod view_state;

pub use artist::{ArtistRecord, CatalogParseError, RawArtistRecord, normalize, parse_catalog};
pub use popularity::PopularityBucket;
pub use region::{RegionBucket, RegionGroup, group_regions, is_major_region};
pub use sample::sample_artists;
pub use view_state::{CategoryFilter, CategoryParseError, SortMode, SortModeParseError, TRENDING_ARTISTS, ViewState};
