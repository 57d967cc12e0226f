use autoversion::boundary::{resolve_boundary, Boundary, BoundaryWarning};

// ============================================================================
// resolve_boundary
// ============================================================================

#[test]
fn test_resolve_boundary_most_recent_tag() {
    let tags = vec!["pkg-2.1.0".to_string(), "pkg-1.9.0".to_string()];
    let boundary = resolve_boundary(&tags);

    assert_eq!(boundary, Boundary::Tag("pkg-2.1.0".to_string()));
    assert_eq!(boundary.tag(), Some("pkg-2.1.0"));
}

#[test]
fn test_resolve_boundary_no_tags() {
    let boundary = resolve_boundary(&[]);

    assert_eq!(boundary, Boundary::None);
    assert_eq!(boundary.tag(), None);
    assert_eq!(boundary.revision_range(), None);
}

#[test]
fn test_resolve_boundary_does_not_sort() {
    // Callers hand over tags already sorted; an out-of-order list is taken as is.
    let tags = vec!["pkg-1.0.0".to_string(), "pkg-3.0.0".to_string()];
    assert_eq!(
        resolve_boundary(&tags),
        Boundary::Tag("pkg-1.0.0".to_string())
    );
}

#[test]
fn test_resolve_boundary_single_tag() {
    let tags = vec!["pkg-0.1.0".to_string()];
    assert_eq!(
        resolve_boundary(&tags).revision_range(),
        Some("pkg-0.1.0..HEAD".to_string())
    );
}

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_no_new_commits_since_tag() {
    let warning = BoundaryWarning::NoNewCommits {
        boundary: Boundary::Tag("pkg-1.0.0".to_string()),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No new commits"),
        "Message should contain 'No new commits', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("pkg-1.0.0"),
        "Message should contain tag 'pkg-1.0.0', got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_commits_at_all() {
    let warning = BoundaryWarning::NoNewCommits {
        boundary: Boundary::None,
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No commits found"),
        "Message should mention that nothing was found, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_recognized_marker() {
    let warning = BoundaryWarning::NoRecognizedMarker { commit_count: 3 };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("3 commit(s)"),
        "Message should contain the commit count, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("defaulting to patch"),
        "Message should explain the fallback, got: {}",
        display_msg
    );
}
