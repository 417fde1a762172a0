use assert_cmd::Command;

pub fn keeporg_cmd() -> Command {
    Command::cargo_bin("keeporg").unwrap()
}
