//! Pet tools: creation, update, lookup, form update, image upload.

pub mod add;
pub mod form_update;
pub mod search;
pub mod update;
pub mod upload;

pub use add::{AddPetParams, AddPetTool};
pub use form_update::{UpdatePetWithFormParams, UpdatePetWithFormTool};
pub use search::{SearchPetParams, SearchPetTool};
pub use update::{UpdatePetParams, UpdatePetTool};
pub use upload::{UploadFileParams, UploadFileTool};
