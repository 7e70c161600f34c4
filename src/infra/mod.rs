pub mod jira;
pub mod release_file;
pub mod subtask_store;
