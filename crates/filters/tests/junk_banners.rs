//! Integration tests for the junk group.
//!
//! Every banner, progress notice and allocator diagnostic rsync prints at
//! `-vv --stats` must be claimed by the junk group so it never reaches an
//! item bucket.

use filters::{FilterGroup, FilterSet};

fn group_of(line: &str) -> Option<FilterGroup> {
    FilterSet::default().classify_line(line)
}

// ============================================================================
// Blank Lines
// ============================================================================

#[test]
fn empty_line_is_junk() {
    assert_eq!(group_of(""), Some(FilterGroup::Junk));
    assert_eq!(group_of("\n"), Some(FilterGroup::Junk));
    assert_eq!(group_of("\r\n"), Some(FilterGroup::Junk));
}

#[test]
fn whitespace_only_line_is_junk() {
    assert_eq!(group_of("   \t \n"), Some(FilterGroup::Junk));
}

// ============================================================================
// Progress Banners
// ============================================================================

#[test]
fn fixed_banners_are_junk() {
    let banners = [
        "sending incremental file list\n",
        "receiving incremental file list\n",
        "building file list ... done\n",
        "total: matches=0  hash_hits=0  false_alarms=0 data=1024\n",
        "total size is 10,240  speedup is 9.71\n",
        "wrote 1,054 bytes  read 35 bytes  2,178.00 bytes/sec\n",
        "sent 1,054 bytes  received 35 bytes  2,178.00 bytes/sec\n",
        "done\n",
        "excluding file scratch.tmp\n",
        "hiding file cache/blob because of pattern cache/\n",
        "[sender] hiding directory build because of pattern build/\n",
        "delta-transmission disabled for local transfer or --whole-file\n",
        "delta-transmission enabled\n",
        "deleting in ./\n",
        "deleting in docs\n",
    ];

    for banner in banners {
        assert_eq!(group_of(banner), Some(FilterGroup::Junk), "{banner:?}");
    }
}

#[test]
fn heap_statistics_block_is_junk() {
    let block = "\
[sender] heap statistics:
  arena:         548864   (bytes from sbrk)
  ordblks:            4   (chunks not in use)
  smblks:             2
  hblks:              2   (chunks from mmap)
  hblkhd:        401408   (bytes from mmap)
  allmem:        950272   (bytes from sbrk + mmap)
  usmblks:            0
  fsmblks:          128
  uordblks:      426448   (bytes used)
  fordblks:      122416   (bytes free)
  keepcost:      120240   (bytes in releasable chunk)
heap statistics:
";

    for line in block.lines() {
        assert_eq!(group_of(line), Some(FilterGroup::Junk), "{line:?}");
    }
}

// ============================================================================
// Near Misses
// ============================================================================

/// Banners are anchored at the start of the line; the same words inside an
/// item path do not make the line junk.
#[test]
fn banner_words_inside_item_lines_are_not_junk() {
    assert_eq!(group_of(">f+++++++++ sent/done.txt\n"), None);
    assert_eq!(group_of(".d..t...... total/\n"), None);
    assert_eq!(group_of("*deleting   excluding.log\n"), None);
}

#[test]
fn generator_excluding_notice_is_not_junk() {
    assert_eq!(
        group_of("[generator] excluding directory .git because of pattern .git/\n"),
        Some(FilterGroup::Excluded)
    );
}
