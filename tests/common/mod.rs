use assert_cmd::Command;

pub fn jotter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jotter").unwrap();
    cmd.env_remove("JOTTER_FILE");
    cmd
}
