use crate::operation::tests::test_utils;
use crate::operation::Include;
use crate::operation::MethodIncludeCursor;

#[test]
fn empty_cursor() {
    let includes = vec![Include::new("route")];
    let mut cursor = MethodIncludeCursor::new(&includes);

    assert!(cursor.peek().is_none());
    assert_eq!(cursor.advance(), 0);
    assert!(cursor.remaining().is_empty());
}

#[test]
fn walks_every_include_left_to_right() {
    let includes = vec![
        Include::new("stoptimesForDate")
            .with_method_include(test_utils::stoptimes_for_date("20240101")),
        Include::new("route"),
        Include::new("route.tripsForDate")
            .with_method_include(test_utils::trips_for_date("20240102")),
    ];
    let mut cursor = MethodIncludeCursor::new(&includes);

    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.remaining().len(), 2);
    assert_eq!(cursor.peek().map(|mi| mi.name()), Some("StoptimesForDate"));

    assert_eq!(cursor.advance(), 1);
    assert_eq!(cursor.peek().map(|mi| mi.name()), Some("TripsForDate"));

    assert_eq!(cursor.advance(), 2);
    assert!(cursor.peek().is_none());
    assert!(cursor.remaining().is_empty());
}

#[test]
fn advancing_past_the_end_is_a_no_op() {
    let includes = vec![
        Include::new("stoptimesForDate")
            .with_method_include(test_utils::stoptimes_for_date("20240101")),
    ];
    let mut cursor = MethodIncludeCursor::new(&includes);

    assert_eq!(cursor.advance(), 1);
    assert_eq!(cursor.advance(), 1);
    assert_eq!(cursor.position(), 1);
}
