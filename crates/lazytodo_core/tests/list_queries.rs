use lazytodo_core::{Todo, TodoList};

fn titles(list: &TodoList) -> Vec<String> {
    list.to_vec().iter().map(|todo| todo.title()).collect()
}

fn sample_list() -> TodoList {
    let mut list = TodoList::new("Today's Todos");
    list.add(Todo::new("Buy milk"));
    list.add(Todo::new("Clean room"));
    list.add(Todo::new("Go to the gym"));
    list.add(Todo::new("Go shopping"));
    list
}

#[test]
fn for_each_visits_entries_in_order() {
    let mut list = sample_list();

    let mut visited = Vec::new();
    list.for_each(|todo| visited.push(todo.title().to_owned()));

    assert_eq!(
        visited,
        ["Buy milk", "Clean room", "Go to the gym", "Go shopping"]
    );
}

#[test]
fn for_each_can_mutate_entries() {
    let mut list = sample_list();

    list.for_each(|todo| {
        if todo.title().starts_with("Go") {
            todo.mark_done();
        }
    });

    assert_eq!(list.all_done().len(), 2);
    assert!(!list.is_done());
}

#[test]
fn filter_round_trip_preserves_order_and_source() {
    let list = sample_list();

    let filtered = list.filter(|todo| todo.title().starts_with("Go"));

    assert_eq!(titles(&filtered), ["Go to the gym", "Go shopping"]);
    assert_eq!(filtered.title(), list.title());
    assert_eq!(list.len(), 4, "filter must not mutate the source list");
}

#[test]
fn filtered_view_shares_entries_with_source() {
    let list = sample_list();

    let filtered = list.filter(|todo| todo.title() == "Clean room");
    assert_eq!(filtered.len(), 1);

    let view_entry = filtered.first().unwrap();
    let source_entry = list.item_at(1).unwrap();
    assert!(view_entry.ptr_eq(&source_entry));

    view_entry.mark_done();
    assert!(source_entry.is_done());
}

#[test]
fn find_by_title_returns_first_exact_match() {
    let mut list = TodoList::new("Errands");
    list.add(Todo::new("Call mom"));
    list.add(Todo::new("Buy milk"));
    list.add(Todo::new("Call mom"));

    let found = list.find_by_title("Call mom").expect("title exists");
    assert!(found.ptr_eq(&list.to_vec()[0]), "first match wins");

    assert!(list.find_by_title("Call").is_none(), "matching is exact");
    assert!(list.find_by_title("Walk dog").is_none());
}

#[test]
fn all_done_and_all_not_done_partition_the_list() {
    let mut list = sample_list();
    list.mark_done_at(0).unwrap();
    list.mark_done_at(2).unwrap();

    let done = list.all_done();
    let pending = list.all_not_done();

    assert_eq!(titles(&done), ["Buy milk", "Go to the gym"]);
    assert_eq!(titles(&pending), ["Clean room", "Go shopping"]);
    assert_eq!(done.len() + pending.len(), list.len());
}

#[test]
fn mark_done_by_title_marks_first_match_only() {
    let mut list = TodoList::new("Errands");
    list.add(Todo::new("Call mom"));
    list.add(Todo::new("Call mom"));

    list.mark_done("Call mom");

    assert!(list.item_at(0).unwrap().is_done());
    assert!(!list.item_at(1).unwrap().is_done());
}

#[test]
fn mark_done_with_unknown_title_is_a_noop() {
    let mut list = sample_list();

    list.mark_done("Walk dog");

    assert_eq!(list.len(), 4);
    assert!(list.all_done().is_empty());
}

#[test]
fn mark_all_done_then_mark_all_undone() {
    let mut list = sample_list();

    list.mark_all_done();
    assert!(list.is_done());

    list.mark_all_undone();
    assert!(list.all_done().is_empty());
    assert_eq!(list.all_not_done().len(), 4);
}

#[test]
fn to_vec_snapshot_is_structurally_independent() {
    let list = sample_list();

    let mut snapshot = list.to_vec();
    snapshot.pop();
    snapshot.remove(0);
    assert_eq!(list.len(), 4, "snapshot membership edits must not leak");

    snapshot[0].mark_done();
    assert!(
        list.item_at(1).unwrap().is_done(),
        "snapshot entries stay shared with the list"
    );
}

#[test]
fn render_writes_header_then_entries_in_order() {
    let mut list = TodoList::new("Today's Todos");
    list.add(Todo::new("Buy milk"));
    list.add(Todo::new("Clean room"));
    list.mark_done_at(0).unwrap();

    assert_eq!(
        list.to_string(),
        "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room"
    );
}

#[test]
fn render_of_empty_list_is_just_the_header() {
    assert_eq!(
        TodoList::new("Empty List").to_string(),
        "---- Empty List ----"
    );
}
