use std::collections::HashSet;

use plytree::{MoveTree, SummaryRecord, Token, summarize};

fn seq(moves: &[&str]) -> Vec<Token> {
    moves.iter().copied().map(Token::new).collect()
}

fn build(corpus: &[Vec<Token>]) -> Vec<SummaryRecord> {
    let mut tree = MoveTree::new();
    for game in corpus {
        tree.insert(game).unwrap();
    }
    summarize(&tree)
}

fn find<'a>(records: &'a [SummaryRecord], state: &str) -> &'a SummaryRecord {
    records
        .iter()
        .find(|record| record.state() == state)
        .unwrap_or_else(|| panic!("no record for state '{state}'"))
}

#[test]
fn two_replies_to_the_same_opening() {
    // One game continues e5, the other c5. Both continuations carry a
    // single game, so nothing below depth 2 is recorded.
    let records = build(&[seq(&["start", "e4", "e5"]), seq(&["start", "e4", "c5"])]);

    assert_eq!(records.len(), 2);

    let root = find(&records, "start");
    assert_eq!(root.depth, 1);
    assert_eq!(root.reply_count, 1);
    assert_eq!(root.total_games, 2);

    let e4 = find(&records, "start e4");
    assert_eq!(e4.depth, 2);
    assert_eq!(e4.reply_count, 2);
    assert_eq!(e4.total_games, 2);

    assert!(records.iter().all(|record| record.depth <= 2));
}

#[test]
fn terminal_children_produce_no_records() {
    // Both continuations of the root end immediately; only the root node
    // is a branch, so only the root is recorded.
    let corpus = [
        seq(&["start", "e4"]),
        seq(&["start", "e4"]),
        seq(&["start", "e4"]),
        seq(&["start", "d4"]),
    ];
    let mut tree = MoveTree::new();
    for game in &corpus {
        tree.insert(game).unwrap();
    }
    let records = summarize(&tree);

    assert_eq!(records.len(), 1);

    let root = find(&records, "start");
    assert_eq!(root.reply_count, 2);
    assert_eq!(root.total_games, 4);

    assert_eq!(
        tree.lookup(&seq(&["start", "e4"])).unwrap(),
        &plytree::Edge::Terminal(3)
    );
    assert_eq!(
        tree.lookup(&seq(&["start", "d4"])).unwrap(),
        &plytree::Edge::Terminal(1)
    );
}

#[test]
fn lone_subtrees_are_recorded_once_and_never_expanded() {
    // The d4 subtree carries one game with a long deterministic tail; the
    // e4 subtree carries two games. Records must stop at "start d4".
    let records = build(&[
        seq(&["start", "e4", "e5"]),
        seq(&["start", "e4", "c5"]),
        seq(&["start", "d4", "d5", "c4", "e6", "Nc3", "1-0"]),
    ]);

    let d4 = find(&records, "start d4");
    assert_eq!(d4.total_games, 1);
    assert_eq!(d4.reply_count, 1);

    assert!(
        records
            .iter()
            .all(|record| !record.state().starts_with("start d4 ")),
        "no descendant of a single-game subtree may be recorded"
    );
}

#[test]
fn every_shared_prefix_is_recorded_exactly_once() {
    // Four games split at depth 2 and again at depth 4. Every branch node
    // under a chain of multi-game prefixes appears exactly once; the
    // single-game branches appear at their entry point and stop there.
    let corpus = [
        seq(&["start", "e4", "e5", "Nf3", "Nc6", "1-0"]),
        seq(&["start", "e4", "e5", "Nf3", "Nf6", "0-1"]),
        seq(&["start", "e4", "e5", "Bc4", "1-0"]),
        seq(&["start", "e4", "c5", "1/2-1/2"]),
    ];
    let records = build(&corpus);

    let expected: HashSet<&str> = [
        "start",
        "start e4",
        "start e4 c5",
        "start e4 e5",
        "start e4 e5 Bc4",
        "start e4 e5 Nf3",
        "start e4 e5 Nf3 Nc6",
        "start e4 e5 Nf3 Nf6",
    ]
    .into_iter()
    .collect();

    let states: Vec<String> = records.iter().map(SummaryRecord::state).collect();
    let unique: HashSet<&str> = states.iter().map(String::as_str).collect();

    assert_eq!(unique.len(), states.len(), "duplicate record paths: {states:?}");
    assert_eq!(unique, expected);

    let nf3 = find(&records, "start e4 e5 Nf3");
    assert_eq!(nf3.reply_count, 2);
    assert_eq!(nf3.total_games, 2);

    // Entry records of single-game subtrees carry the aggregate fact and
    // nothing below them is expanded.
    let c5 = find(&records, "start e4 c5");
    assert_eq!((c5.reply_count, c5.total_games), (1, 1));
    assert!(!unique.contains("start e4 c5 1/2-1/2"));
}

#[test]
fn empty_corpus_yields_an_empty_table() {
    assert!(summarize(&MoveTree::new()).is_empty());
}

#[test]
fn single_game_corpus_yields_only_the_root_record() {
    let records = build(&[seq(&["start", "e4", "e5", "Nf3", "Nc6", "Bb5", "1-0"])]);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].state(), "start");
    assert_eq!(records[0].depth, 1);
    assert_eq!(records[0].reply_count, 1);
    assert_eq!(records[0].total_games, 1);
}
