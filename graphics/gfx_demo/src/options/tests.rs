use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_no_arguments_uses_defaults() {
    let options = DemoOptions::parse(&[]);
    assert_eq!(options, Ok(DemoOptions::default()));
}

#[test]
fn test_capacity_override() {
    let options = DemoOptions::parse(&args(&["--capacity=5"]));
    assert_eq!(options.map(|o| o.registry.capacity), Ok(5));
}

#[test]
fn test_zero_capacity_rejected() {
    assert_eq!(
        DemoOptions::parse(&args(&["--capacity=0"])),
        Err(OptionsError::InvalidCapacity("0".to_string()))
    );
}

#[test]
fn test_non_numeric_capacity_rejected() {
    assert_eq!(
        DemoOptions::parse(&args(&["--capacity=lots"])),
        Err(OptionsError::InvalidCapacity("lots".to_string()))
    );
}

#[test]
fn test_help_flags() {
    for flag in ["-h", "--help"] {
        let options = DemoOptions::parse(&args(&[flag]));
        assert_eq!(options.map(|o| o.help), Ok(true));
    }
}

#[test]
fn test_unknown_argument() {
    let err = DemoOptions::parse(&args(&["--verbose"]));
    assert_eq!(
        err,
        Err(OptionsError::UnknownArgument("--verbose".to_string()))
    );
    assert_eq!(
        OptionsError::UnknownArgument("--verbose".to_string()).to_string(),
        "unknown argument '--verbose'"
    );
}

#[test]
fn test_last_capacity_wins() {
    let options = DemoOptions::parse(&args(&["--capacity=3", "--capacity=9"]));
    assert_eq!(options.map(|o| o.registry.capacity), Ok(9));
}
