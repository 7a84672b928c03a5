use crate::visited::VisitedSet;

#[test]
fn test_mark_is_case_insensitive() {
    let mut visited = VisitedSet::new();
    assert!(visited.mark("Tau Ceti"));
    assert!(!visited.mark("tau  ceti"));

    assert!(visited.contains("TAU CETI"));
    assert!(!visited.contains("Sol"));
    assert_eq!(visited.len(), 1);
}

#[test]
fn test_blank_names_are_ignored() {
    let mut visited = VisitedSet::new();
    assert!(!visited.mark(""));
    assert!(!visited.mark("   "));
    assert!(visited.is_empty());
    assert!(!visited.contains(""));
}

#[test]
fn test_iterates_sorted_keys() {
    let visited: VisitedSet = ["Vega", "Sol", "Altair", "sol"].into_iter().collect();
    assert_eq!(visited.iter().collect::<Vec<_>>(), vec!["altair", "sol", "vega"]);
}

#[test]
fn test_clear() {
    let mut visited: VisitedSet = ["Sol"].into_iter().collect();
    visited.extend(["Vega"]);
    assert_eq!(visited.len(), 2);
    visited.clear();
    assert!(visited.is_empty());
}
