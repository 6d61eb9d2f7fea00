//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod pet;
pub mod store;
pub mod user;

pub use pet::{
    AddPetParams, AddPetTool, SearchPetParams, SearchPetTool, UpdatePetParams, UpdatePetTool,
    UpdatePetWithFormParams, UpdatePetWithFormTool, UploadFileParams, UploadFileTool,
};
pub use store::{GetInventoryParams, GetInventoryTool};
pub use user::{
    CreateUserParams, CreateUserTool, CreateUsersWithArrayInputParams,
    CreateUsersWithArrayInputTool, CreateUsersWithListInputParams, CreateUsersWithListInputTool,
    SearchUserParams, SearchUserTool, UpdateUserParams, UpdateUserTool,
};
