//! User tools: creation (single and batch), lookup/login/logout, update.

pub mod create;
pub mod create_with_array;
pub mod create_with_list;
pub mod search;
pub mod update;

pub use create::{CreateUserParams, CreateUserTool};
pub use create_with_array::{CreateUsersWithArrayInputParams, CreateUsersWithArrayInputTool};
pub use create_with_list::{CreateUsersWithListInputParams, CreateUsersWithListInputTool};
pub use search::{SearchUserParams, SearchUserTool};
pub use update::{UpdateUserParams, UpdateUserTool};
