use punchlist::models::Filter;
use punchlist::store::TaskStore;
use speculate2::speculate;

fn texts(store: &TaskStore, filter: Filter) -> Vec<String> {
    store.filtered(filter).map(|t| t.text.clone()).collect()
}

speculate! {
    before {
        let mut store = TaskStore::new();
    }

    describe "add" {
        it "creates an incomplete task at the front" {
            store.add("buy milk").expect("add was rejected");

            let all: Vec<_> = store.filtered(Filter::All).collect();
            assert_eq!(all.len(), 1);
            assert_eq!(all[0].text, "buy milk");
            assert!(!all[0].completed);
        }

        it "orders newest first" {
            store.add("a").unwrap();
            store.add("b").unwrap();

            assert_eq!(texts(&store, Filter::All), vec!["b", "a"]);
        }

        it "rejects empty text" {
            assert!(store.add("").is_none());
            assert!(store.is_empty());
            assert_eq!(store.active_count(), 0);
        }

        it "rejects whitespace-only text" {
            assert!(store.add("   ").is_none());
            assert!(store.is_empty());
            assert_eq!(store.active_count(), 0);
        }

        it "trims surrounding whitespace" {
            let task = store.add("  walk the dog  ").unwrap();
            assert_eq!(task.text, "walk the dog");
        }

        it "issues unique ids across an arbitrary op sequence" {
            for i in 0..10 {
                store.add(&format!("task {}", i)).unwrap();
            }
            let victim = store.tasks()[4].id;
            store.toggle(victim);
            store.remove(victim);
            for i in 10..20 {
                store.add(&format!("task {}", i)).unwrap();
            }

            let mut ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
            let len = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), len);
        }
    }

    describe "toggle" {
        it "moves a completed task after all incomplete ones" {
            store.add("a").unwrap();
            store.add("b").unwrap();
            let c = store.add("c").unwrap();

            assert!(store.toggle(c.id));

            assert_eq!(texts(&store, Filter::All), vec!["b", "a", "c"]);
            assert!(store.tasks()[2].completed);
        }

        it "keeps relative order within each partition" {
            store.add("a").unwrap();
            let b = store.add("b").unwrap();
            store.add("c").unwrap();
            let d = store.add("d").unwrap();

            // List is [d, c, b, a]; complete d then b.
            store.toggle(d.id);
            store.toggle(b.id);

            assert_eq!(texts(&store, Filter::All), vec!["c", "a", "d", "b"]);
        }

        it "decrements active_count by exactly one" {
            store.add("a").unwrap();
            let b = store.add("b").unwrap();
            assert_eq!(store.active_count(), 2);

            store.toggle(b.id);
            assert_eq!(store.active_count(), 1);
        }

        it "restores the completion flag on a double toggle" {
            let a = store.add("a").unwrap();
            store.toggle(a.id);
            store.toggle(a.id);

            assert!(!store.tasks()[0].completed);
            assert_eq!(store.active_count(), 1);
        }

        it "moves a reactivated task ahead of completed ones" {
            let a = store.add("a").unwrap();
            let b = store.add("b").unwrap();
            store.toggle(a.id);
            store.toggle(b.id);

            // Both completed; reactivate a.
            store.toggle(a.id);

            let tasks = store.tasks();
            assert_eq!(tasks[0].text, "a");
            assert!(!tasks[0].completed);
            assert!(tasks[1].completed);
        }

        it "is a no-op for an unknown id" {
            store.add("a").unwrap();
            assert!(!store.toggle(42));
            assert_eq!(store.active_count(), 1);
        }
    }

    describe "remove" {
        it "removes exactly the matching task" {
            let a = store.add("a").unwrap();
            store.add("b").unwrap();

            assert!(store.remove(a.id));
            assert_eq!(texts(&store, Filter::All), vec!["b"]);
        }

        it "is a no-op for an unknown id" {
            store.add("a").unwrap();
            assert!(!store.remove(42));
            assert_eq!(store.len(), 1);
        }
    }

    describe "clear_completed" {
        it "removes only completed tasks and keeps survivor order" {
            store.add("a").unwrap();
            let b = store.add("b").unwrap();
            store.add("c").unwrap();
            let d = store.add("d").unwrap();
            store.toggle(b.id);
            store.toggle(d.id);

            assert_eq!(store.clear_completed(), 2);
            assert_eq!(texts(&store, Filter::All), vec!["c", "a"]);
        }

        it "is a no-op when nothing is completed" {
            store.add("a").unwrap();
            assert_eq!(store.clear_completed(), 0);
            assert_eq!(store.len(), 1);
        }
    }

    describe "filtered" {
        it "partitions the views by completion" {
            store.add("a").unwrap();
            let b = store.add("b").unwrap();
            store.toggle(b.id);

            assert_eq!(texts(&store, Filter::All), vec!["a", "b"]);
            assert_eq!(texts(&store, Filter::Active), vec!["a"]);
            assert_eq!(texts(&store, Filter::Completed), vec!["b"]);
        }

        it "does not disturb the stored order" {
            store.add("a").unwrap();
            store.add("b").unwrap();

            let _ = texts(&store, Filter::Active);
            let _ = texts(&store, Filter::Completed);

            assert_eq!(texts(&store, Filter::All), vec!["b", "a"]);
        }
    }

    describe "session walkthrough" {
        it "toggling the oldest of two tasks leaves it last" {
            let a = store.add("a").unwrap();
            store.add("b").unwrap();
            assert_eq!(texts(&store, Filter::All), vec!["b", "a"]);

            store.toggle(a.id);

            assert_eq!(texts(&store, Filter::All), vec!["b", "a"]);
            assert!(store.tasks()[1].completed);
            assert_eq!(store.active_count(), 1);
        }
    }
}
