mod icons;
mod skeleton;
mod thumbnail;
mod video_card;
mod home_page;
mod player_page;
mod video_controls;
mod mini_player;
mod autoplay_countdown;
mod bottom_sheet;
mod related_videos;
mod global_player;

pub use icons::{ChevronUpIcon, CloseIcon, ErrorIcon, PauseIcon, PlayIcon, SkipBackIcon, SkipForwardIcon};
pub use skeleton::VideoCardSkeleton;
pub use thumbnail::Thumbnail;
pub use video_card::CategorySection;
pub use home_page::HomePage;
pub use player_page::PlayerPage;
pub use video_controls::VideoControls;
pub use mini_player::MiniPlayer;
pub use autoplay_countdown::AutoplayCountdown;
pub use bottom_sheet::BottomSheet;
pub use related_videos::{RelatedVideosList, SwipeUpHint};
pub use global_player::GlobalPlayer;
