use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for casebase, isolated from the user's config directory
pub fn casebase() -> Command {
    let mut cmd = cargo_bin_cmd!("casebase");
    cmd.env_remove("CASEBASE_CORPUS")
        .env_remove("CASEBASE_CONFIG")
        .env_remove("CASEBASE_LOG")
        .env_remove("RUST_LOG")
        .env("CASEBASE_CONFIG_DIR", "/nonexistent/casebase-test-config");
    cmd
}

/// Small movie corpus used across CLI tests.
///
/// "Alien" and "Aliens" share most attributes; "Heat" and "Ronin" form a
/// second cluster; "Hamlet" appears twice under different ids.
pub const MOVIES_CSV: &str = r#"id,original_title,title,overview,release_date,popularity,vote_average,genres,keywords
348,Alien,Alien,The crew of the Nostromo...,1979-05-25,82.0,7.9,"[{""id"": 27, ""name"": ""Horror""}, {""id"": 878, ""name"": ""Science Fiction""}]","[{""id"": 1, ""name"": ""spaceship""}, {""id"": 2, ""name"": ""alien""}]"
679,Aliens,Aliens,Ripley returns.,1986-07-18,67.0,7.7,"[{""id"": 28, ""name"": ""Action""}, {""id"": 27, ""name"": ""Horror""}, {""id"": 878, ""name"": ""Science Fiction""}]","[{""id"": 2, ""name"": ""alien""}]"
949,Heat,Heat,A group of professional bank robbers...,1995-12-15,70.9,7.7,"[{""id"": 28, ""name"": ""Action""}, {""id"": 80, ""name"": ""Crime""}, {""id"": 18, ""name"": ""Drama""}]","[{""id"": 3, ""name"": ""heist""}]"
8195,Ronin,Ronin,A team of mercenaries...,1998-09-25,28.7,6.8,"[{""id"": 28, ""name"": ""Action""}, {""id"": 80, ""name"": ""Crime""}]","[{""id"": 3, ""name"": ""heist""}, {""id"": 4, ""name"": ""paris""}]"
10549,Hamlet,Hamlet,Branagh's Hamlet.,1996-12-25,8.2,7.5,"[{""id"": 18, ""name"": ""Drama""}]",[]
18215,Hamlet,Hamlet 2000,Modern Hamlet.,2000-05-12,3.1,5.8,"[{""id"": 18, ""name"": ""Drama""}]",[]
"#;

/// Write the test corpus into `dir` and return its path
pub fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("movies.csv");
    fs::write(&path, MOVIES_CSV).unwrap();
    path
}

/// Write a `casebase.toml` into `dir`
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("casebase.toml");
    fs::write(&path, contents).unwrap();
    path
}
