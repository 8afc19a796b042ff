use clap::Parser;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::controller::{execute, Command, Outcome};
use crate::datastore::{JsonFileStorage, TaskStorage, TaskStore};
use crate::model::{Status, Timestamp};
use crate::Cli;

struct Workspace {
    _dir: TempDir,
    path: PathBuf,
    storage: JsonFileStorage,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let storage = JsonFileStorage::new(&path);
        Self {
            _dir: dir,
            path,
            storage,
        }
    }

    /// Runs a command line the way the binary would, minus printing.
    fn run(&self, args: &[&str]) -> Outcome {
        let cli = Cli::try_parse_from(std::iter::once("task-cli").chain(args.iter().copied()))
            .unwrap();
        execute(&self.storage, cli.command).unwrap()
    }

    fn store(&self) -> TaskStore {
        self.storage.load().unwrap()
    }

    fn raw(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap()
    }
}

#[test]
fn test_e2e_scenario() {
    let ws = Workspace::new();

    ws.run(&["add", "buy milk"]);
    let store = ws.store();
    assert_eq!(store.tasks.len(), 1);
    assert_eq!(store.tasks[0].id, 1);
    assert_eq!(store.tasks[0].status, Status::ToDo);

    ws.run(&["mark", "done", "1"]);
    assert_eq!(ws.store().tasks[0].status, Status::Done);

    ws.run(&["add", "walk dog"]);
    let store = ws.store();
    assert_eq!(store.tasks[1].id, 2);
    assert_eq!(store.tasks[1].status, Status::ToDo);

    assert_eq!(
        ws.run(&["delete", "1"]),
        Outcome::Done("Task 1 removed!".into())
    );
    let store = ws.store();
    assert_eq!(store.tasks.len(), 1);
    assert_eq!(store.tasks[0].id, 2);
    assert_eq!(store.count, 2, "count survives deletes");

    match ws.run(&["list", "to-do"]) {
        Outcome::Listed(tasks) => {
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].id, 2);
            assert_eq!(tasks[0].description, "walk dog");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_e2e_ids_follow_add_calls() {
    let ws = Workspace::new();
    for n in 1..=4 {
        let description = format!("task {}", n);
        ws.run(&["add", description.as_str()]);
    }
    ws.run(&["delete", "4"]);
    ws.run(&["delete", "2"]);
    ws.run(&["add", "task 5"]);

    let store = ws.store();
    assert_eq!(store.count, 5);
    assert_eq!(
        store.tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![1, 3, 5]
    );
}

#[test]
fn test_e2e_repeated_delete() {
    let ws = Workspace::new();
    ws.run(&["add", "buy milk"]);
    ws.run(&["add", "walk dog"]);

    ws.run(&["delete", "1"]);
    let before = ws.raw();
    assert!(matches!(ws.run(&["delete", "1"]), Outcome::Rejected(_)));
    assert_eq!(ws.raw(), before, "file is unchanged");
}

#[test]
fn test_e2e_bogus_status() {
    let ws = Workspace::new();
    ws.run(&["add", "buy milk"]);
    ws.run(&["mark", "in-progress", "1"]);
    let before = ws.store();

    match ws.run(&["mark", "bogus", "1"]) {
        Outcome::Rejected(message) => assert!(message.contains("'in-progress', 'to-do' or 'done'")),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(ws.store(), before);
    assert_eq!(ws.store().tasks[0].status, Status::InProgress);
}

#[test]
fn test_e2e_delete_unknown() {
    let ws = Workspace::new();
    ws.run(&["add", "buy milk"]);
    let before = ws.store();

    assert_eq!(
        ws.run(&["delete", "99"]),
        Outcome::Rejected(
            "The id 99 doesn't exist in the task database. Check the entire list with the command: 'list'"
                .into()
        )
    );
    assert_eq!(ws.store(), before);
}

#[test]
fn test_e2e_update() {
    let ws = Workspace::new();
    ws.run(&["add", "buy milk"]);
    let before = ws.store().tasks[0].clone();

    assert_eq!(
        ws.run(&["update", "buy oat milk", "1"]),
        Outcome::Done("Task 1 updated!".into())
    );
    let after = ws.store().tasks[0].clone();
    assert_eq!(after.description, "buy oat milk");
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);
}

#[test]
fn test_e2e_empty_store_round_trip() {
    let ws = Workspace::new();

    // a rejected mutation on a fresh store still writes the empty state
    assert!(matches!(ws.run(&["delete", "1"]), Outcome::Rejected(_)));
    assert_eq!(ws.raw(), "{\n    \"count\": 0,\n    \"tasks\": []\n}");
    assert_eq!(ws.store(), TaskStore::new());
}

#[test]
fn test_e2e_list_is_read_only() {
    let ws = Workspace::new();
    assert!(matches!(ws.run(&["list"]), Outcome::Rejected(_)));
    assert!(!ws.path.exists(), "listing never creates the file");

    ws.run(&["add", "buy milk"]);
    std::fs::write(&ws.path, ws.raw().replace("buy milk", "buy bread")).unwrap();
    let edited = ws.raw();
    ws.run(&["list"]);
    assert_eq!(ws.raw(), edited);
}

#[test]
fn test_e2e_corrupt_file_starts_over() {
    let ws = Workspace::new();
    std::fs::write(&ws.path, "{ this is not json").unwrap();

    assert_eq!(
        ws.run(&["add", "fresh start"]),
        Outcome::Done("Task added successfully! (ID: 1)".into())
    );
    let store = ws.store();
    assert_eq!(store.count, 1);
    assert_eq!(store.tasks[0].description, "fresh start");
}

#[test]
fn test_e2e_existing_file_is_compatible() {
    let ws = Workspace::new();
    std::fs::write(
        &ws.path,
        r#"{
    "count": 3,
    "tasks": [
        {
            "description": "buy milk",
            "status": "done",
            "ID": 1,
            "createdAt": "2024 - Feb 10 | 08:15",
            "updatedAT": "2024 - Feb 10 | 08:15"
        },
        {
            "description": "walk dog",
            "status": "to-do",
            "ID": 3,
            "createdAt": "2024 - Feb 11 | 19:40",
            "updatedAT": "2024 - Feb 12 | 07:02"
        }
    ]
}"#,
    )
    .unwrap();

    assert_eq!(
        ws.run(&["add", "water plants"]),
        Outcome::Done("Task added successfully! (ID: 4)".into())
    );
    ws.run(&["mark", "in-progress", "3"]);

    let raw = ws.raw();
    assert!(raw.contains("\"updatedAT\": \"2024 - Feb 12 | 07:02\""));
    assert!(raw.contains("\"createdAt\": \"2024 - Feb 10 | 08:15\""));
    assert!(raw.contains("\"status\": \"in-progress\""));
    assert!(raw.contains("\"count\": 4"));
}

#[test]
fn test_e2e_out_of_order_file() {
    let ws = Workspace::new();
    std::fs::write(
        &ws.path,
        r#"{"count": 1, "tasks": [
            {"description": "b", "status": "to-do", "ID": 2, "createdAt": "2024 - Feb 10 | 08:15", "updatedAT": "2024 - Feb 10 | 08:15"},
            {"description": "a", "status": "to-do", "ID": 1, "createdAt": "2024 - Feb 10 | 08:15", "updatedAT": "2024 - Feb 10 | 08:15"}
        ]}"#,
    )
    .unwrap();

    assert_eq!(
        ws.run(&["mark", "done", "1"]),
        Outcome::Done("Task 1 is marked as done!".into())
    );
    assert_eq!(
        ws.run(&["add", "c"]),
        Outcome::Done("Task added successfully! (ID: 3)".into())
    );
    let store = ws.store();
    assert_eq!(
        store.tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_cli_arguments() {
    let parse = |args: &[&str]| {
        Cli::try_parse_from(std::iter::once("task-cli").chain(args.iter().copied()))
            .map(|cli| cli.command)
    };

    assert_eq!(
        parse(&["mark", "done", "3"]).unwrap(),
        Command::Mark {
            status: "done".into(),
            id: 3
        }
    );
    assert_eq!(
        parse(&["update", "new text", "2"]).unwrap(),
        Command::Update {
            description: "new text".into(),
            id: 2
        }
    );
    assert_eq!(
        parse(&["list"]).unwrap(),
        Command::List { status: None }
    );
    // status values are validated by the command, not the parser
    assert!(parse(&["mark", "bogus", "1"]).is_ok());

    assert!(parse(&["delete", "one"]).is_err());
    assert!(parse(&["add"]).is_err());
    assert!(parse(&["frobnicate"]).is_err());
}

#[test]
fn test_e2e_foreign_month_names_survive() {
    let ws = Workspace::new();
    std::fs::write(
        &ws.path,
        r#"{
    "count": 2,
    "tasks": [
        {
            "description": "Milch kaufen",
            "status": "to-do",
            "ID": 1,
            "createdAt": "2024 - Mär 05 | 14:07",
            "updatedAT": "2024 - Mär 05 | 14:07"
        },
        {
            "description": "walk dog",
            "status": "done",
            "ID": 2,
            "createdAt": "2024 - Feb 11 | 19:40",
            "updatedAT": "2024 - Feb 12 | 07:02"
        }
    ]
}"#,
    )
    .unwrap();

    assert_eq!(
        ws.run(&["add", "new"]),
        Outcome::Done("Task added successfully! (ID: 3)".into())
    );

    let store = ws.store();
    assert_eq!(store.count, 3);
    assert_eq!(
        store.tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    let raw = ws.raw();
    assert!(raw.contains("\"createdAt\": \"2024 - Mär 05 | 14:07\""));
    assert!(raw.contains("\"updatedAT\": \"2024 - Mär 05 | 14:07\""));

    // renaming replaces the unreadable stamp, creation time stays verbatim
    ws.run(&["update", "Hafermilch kaufen", "1"]);
    let task = ws.store().tasks[0].clone();
    assert!(matches!(task.updated_at, Timestamp::At(_)));
    assert_eq!(task.created_at, Timestamp::Raw("2024 - Mär 05 | 14:07".into()));
}

#[test]
fn test_e2e_exhausted_counter() {
    let ws = Workspace::new();
    std::fs::write(&ws.path, r#"{"count": 18446744073709551615, "tasks": []}"#).unwrap();

    assert!(matches!(ws.run(&["add", "x"]), Outcome::Rejected(_)));
    let store = ws.store();
    assert_eq!(store.count, u64::MAX);
    assert!(store.tasks.is_empty());
}
