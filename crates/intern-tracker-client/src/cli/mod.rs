/*
[INPUT]:  Loaded AppConfig and terminal input
[OUTPUT]: Subcommand implementations of the intern-tracker binary
[POS]:    CLI layer - module wiring
[UPDATE]: When adding a subcommand
*/

pub mod init;
pub mod interactive;
pub mod query;
