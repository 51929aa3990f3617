pub mod form_phase;
pub mod form_state;
pub mod item_selection;
pub mod notice;
pub mod region_selector;

pub use form_phase::FormPhase;
pub use form_state::{FormSnapshot, FormState};
pub use item_selection::ItemSelection;
pub use notice::{Notice, NoticeLevel};
pub use region_selector::{MunicipalityRequest, RegionSelector};
