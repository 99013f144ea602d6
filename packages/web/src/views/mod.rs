mod shell;
pub use shell::DiaryShell;
