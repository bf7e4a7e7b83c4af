//! Tests for pagination module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// NextPage Tests
// ============================================================================

#[test]
fn test_next_page_with_param() {
    let next = NextPage::with_param("page", "2");
    assert!(next.is_continue());
    assert!(!next.is_done());

    if let NextPage::Continue { query_params } = next {
        assert_eq!(query_params.get("page"), Some(&"2".to_string()));
    } else {
        panic!("Expected Continue");
    }
}

#[test]
fn test_next_page_done() {
    let next = NextPage::Done;
    assert!(next.is_done());
    assert!(!next.is_continue());
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert_eq!(state.page, 0);
    assert!(state.cursor.is_none());
    assert_eq!(state.total_fetched, 0);
    assert!(!state.done);
}

#[test]
fn test_pagination_state_mutations() {
    let mut state = PaginationState::new();

    state.next_page();
    assert_eq!(state.page, 1);

    state.set_cursor("cursor123".to_string());
    assert_eq!(state.cursor, Some("cursor123".to_string()));

    state.add_fetched(100);
    assert_eq!(state.total_fetched, 100);

    state.mark_done();
    assert!(state.done);
}

// ============================================================================
// CursorPaginator Tests
// ============================================================================

#[test]
fn test_cursor_paginator_continues_on_cursor() {
    let paginator = CursorPaginator::new("pageCursor", "nextPageCursor");
    let mut state = PaginationState::new();

    let body = json!({"count": 2, "nextPageCursor": "abc", "results": [{}, {}]});
    let next = paginator.process_response(&body, 2, &mut state);

    assert_eq!(next, NextPage::with_param("pageCursor", "abc"));
    assert_eq!(state.cursor, Some("abc".to_string()));
    assert_eq!(state.total_fetched, 2);
    assert!(!state.done);

    // Next request echoes the stored cursor
    let params = paginator.initial_params(&state);
    assert_eq!(params.get("pageCursor"), Some(&"abc".to_string()));
}

#[test]
fn test_cursor_paginator_stops_on_null_cursor() {
    let paginator = CursorPaginator::new("pageCursor", "nextPageCursor");
    let mut state = PaginationState::new();

    let body = json!({"count": 1, "nextPageCursor": null, "results": [{}]});
    let next = paginator.process_response(&body, 1, &mut state);

    assert_eq!(next, NextPage::Done);
    assert!(state.done);
}

#[test]
fn test_cursor_paginator_stops_on_absent_cursor() {
    let paginator = CursorPaginator::new("pageCursor", "nextPageCursor");
    let mut state = PaginationState::new();

    let body = json!({"count": 1, "results": [{}]});
    assert_eq!(paginator.process_response(&body, 1, &mut state), NextPage::Done);
}

#[test]
fn test_cursor_paginator_stops_on_empty_cursor() {
    let paginator = CursorPaginator::new("pageCursor", "nextPageCursor");
    let mut state = PaginationState::new();

    let body = json!({"count": 1, "nextPageCursor": "", "results": [{}]});
    assert_eq!(paginator.process_response(&body, 1, &mut state), NextPage::Done);
}

#[test]
fn test_cursor_paginator_first_request_has_no_cursor() {
    let paginator = CursorPaginator::new("pageCursor", "nextPageCursor");
    let state = PaginationState::new();

    assert!(paginator.initial_params(&state).is_empty());
}

#[test]
fn test_cursor_paginator_numeric_cursor() {
    let paginator = CursorPaginator::new("pageCursor", "nextPageCursor");
    let mut state = PaginationState::new();

    let body = json!({"count": 1, "nextPageCursor": 42, "results": [{}]});
    let next = paginator.process_response(&body, 1, &mut state);

    assert_eq!(next, NextPage::with_param("pageCursor", "42"));
}

// ============================================================================
// PageNumberPaginator Tests
// ============================================================================

#[test]
fn test_page_number_paginator_starts_at_one() {
    let paginator = PageNumberPaginator::new("page", "next");
    let state = PaginationState::new();

    let params = paginator.initial_params(&state);
    assert_eq!(params.get("page"), Some(&"1".to_string()));
}

#[test]
fn test_page_number_paginator_increments_while_next_present() {
    let paginator = PageNumberPaginator::new("page", "next");
    let mut state = PaginationState::new();

    let body = json!({
        "count": 150,
        "next": "https://readwise.io/api/v2/highlights/?page=2",
        "previous": null,
        "results": [{}, {}]
    });
    let next = paginator.process_response(&body, 2, &mut state);

    assert_eq!(next, NextPage::with_param("page", "2"));
    assert_eq!(state.page, 2);

    // Page numbers strictly increase across subsequent responses
    let next = paginator.process_response(&body, 2, &mut state);
    assert_eq!(next, NextPage::with_param("page", "3"));
    assert_eq!(state.total_fetched, 4);
}

#[test]
fn test_page_number_paginator_stops_on_null_next() {
    let paginator = PageNumberPaginator::new("page", "next");
    let mut state = PaginationState::new();

    let body = json!({"count": 2, "next": null, "previous": null, "results": [{}, {}]});
    let next = paginator.process_response(&body, 2, &mut state);

    assert_eq!(next, NextPage::Done);
    assert!(state.done);
}

#[test]
fn test_page_number_paginator_resumes_from_state() {
    let paginator = PageNumberPaginator::new("page", "next");
    let mut state = PaginationState::new();
    state.page = 4;

    let params = paginator.initial_params(&state);
    assert_eq!(params.get("page"), Some(&"4".to_string()));
}

// ============================================================================
// NoPaginator Tests
// ============================================================================

#[test]
fn test_no_paginator_single_page() {
    let paginator = NoPaginator;
    let mut state = PaginationState::new();

    assert!(paginator.initial_params(&state).is_empty());

    let body = json!({"highlights": [{}]});
    let next = paginator.process_response(&body, 1, &mut state);

    assert_eq!(next, NextPage::Done);
    assert!(state.done);
    assert_eq!(state.total_fetched, 1);
}
