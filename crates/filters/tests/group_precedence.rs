//! Integration tests for the excluded and warning/error groups and for the
//! fixed Junk, Excluded, WarnErr, Stats evaluation order.

use filters::{FilterGroup, FilterSet, PatternConfig};

fn group_of(line: &str) -> Option<FilterGroup> {
    FilterSet::default().classify_line(line)
}

// ============================================================================
// Excluded Notices
// ============================================================================

#[test]
fn generator_exclusion_notices_are_excluded() {
    let lines = [
        "[generator] excluding file notes.swp because of pattern *.swp\n",
        "[generator] excluding directory node_modules because of pattern node_modules/\n",
        "[generator] protecting file keep/me.txt because of pattern keep/\n",
        "[generator] protecting directory vault because of pattern /vault\n",
    ];
    for line in lines {
        assert_eq!(group_of(line), Some(FilterGroup::Excluded), "{line:?}");
    }
}

#[test]
fn incomplete_exclusion_notice_is_not_excluded() {
    assert_eq!(group_of("[generator] excluding file notes.swp\n"), None);
}

// ============================================================================
// Warnings and Errors
// ============================================================================

#[test]
fn warnings_and_errors_are_warn_err() {
    let lines = [
        "WARNING: big.iso failed verification -- update discarded (will try again).\n",
        "ERROR: big.iso failed verification -- update discarded.\n",
        "IO error encountered -- skipping file deletion\n",
        "file has vanished: \"/src/tmp/lockfile\"\n",
        "rsync error: some files/attrs were not transferred (see previous errors) (code 23) at main.c(1338) [sender=3.2.7]\n",
        "rsync warning: some files vanished before they could be transferred (code 24) at main.c(1338) [sender=3.2.7]\n",
        "cannot delete non-empty directory: old/cache\n",
    ];
    for line in lines {
        assert_eq!(group_of(line), Some(FilterGroup::WarnErr), "{line:?}");
    }
}

// ============================================================================
// Priority
// ============================================================================

#[test]
fn first_group_in_priority_order_wins() {
    let config = PatternConfig {
        excluded: vec!["^rsync error".into()],
        stats: Vec::new(),
        ..PatternConfig::default()
    };
    let set = FilterSet::from_config(&config).unwrap();
    assert_eq!(
        set.classify_line("rsync error: unexplained error (code 255)"),
        Some(FilterGroup::Excluded)
    );
}

#[test]
fn classification_is_deterministic() {
    let set = FilterSet::default();
    let lines = [
        "\n",
        "[generator] excluding file a because of pattern a\n",
        "rsync warning: x\n",
        "Total bytes received: 10\n",
        ">f.st...... a\n",
    ];
    let first: Vec<_> = lines.iter().map(|line| set.classify_line(line)).collect();
    let second: Vec<_> = lines.iter().map(|line| set.classify_line(line)).collect();
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            Some(FilterGroup::Junk),
            Some(FilterGroup::Excluded),
            Some(FilterGroup::WarnErr),
            Some(FilterGroup::Stats),
            None,
        ]
    );
}
