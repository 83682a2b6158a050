use super::*;
use pretty_assertions::assert_eq;

#[test]
fn no_flags_is_default() {
    assert_eq!(RunFlags::parse(Vec::<&str>::new()), Ok(RunFlags::default()));
    assert_eq!(
        RunFlags::default().runtime_config(),
        RuntimeConfig::default()
    );
}

#[test]
fn all_flags() {
    let flags = RunFlags::parse(["--max-depth=200", "--quiet-gc", "--verbose"]).unwrap();
    assert_eq!(
        flags,
        RunFlags {
            max_depth: Some(200),
            quiet_gc: true,
            verbose: true,
        }
    );
    assert_eq!(
        flags.runtime_config(),
        RuntimeConfig {
            max_call_depth: Some(200),
            report_gc: false,
        }
    );
}

#[test]
fn bad_depth_is_rejected() {
    assert_eq!(
        RunFlags::parse(["--max-depth=lots"]),
        Err("invalid value for --max-depth: 'lots'".to_string())
    );
}

#[test]
fn unknown_flag_is_rejected() {
    assert_eq!(
        RunFlags::parse(["--fast"]),
        Err("unknown option '--fast'".to_string())
    );
}
