use bakecart_cart::{CartConfig, CartStore, Catalog, InMemoryKvStore, KvStore, Price};
use proptest::prelude::*;

const IDS: [&str; 5] = [
    "bolo-classico",
    "bolo-recheado",
    "bolo-gelado",
    "bolo-personalizado",
    "bolo-fit",
];
const FLAVORS: [&str; 3] = ["", "Chocolate", "Coco"];
const NOTES: [&str; 2] = ["", "sem açúcar"];

#[derive(Clone, Debug)]
enum Op {
    Add { product: usize, qty: i64, flavor: usize, notes: usize },
    Update { index: usize, qty: i64 },
    Remove { index: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..IDS.len(), 1i64..20, 0..FLAVORS.len(), 0..NOTES.len()).prop_map(
            |(product, qty, flavor, notes)| Op::Add { product, qty, flavor, notes }
        ),
        1 => (0usize..8, -3i64..20).prop_map(|(index, qty)| Op::Update { index, qty }),
        1 => (0usize..8).prop_map(|index| Op::Remove { index }),
    ]
}

fn apply(cart: &mut CartStore<InMemoryKvStore>, op: &Op) {
    match *op {
        Op::Add { product, qty, flavor, notes } => {
            cart.add_item(IDS[product], qty, NOTES[notes], FLAVORS[flavor])
                .unwrap();
        }
        Op::Update { index, qty } => {
            if index < cart.len() {
                cart.update_quantity(index, qty).unwrap();
            } else {
                assert!(cart.update_quantity(index, qty).is_err());
            }
        }
        Op::Remove { index } => {
            if index < cart.len() {
                cart.remove_item(index).unwrap();
            } else {
                assert!(cart.remove_item(index).is_err());
            }
        }
    }
}

fn new_cart() -> CartStore<InMemoryKvStore> {
    CartStore::open(Catalog::bakery(), InMemoryKvStore::new(), CartConfig::default())
}

proptest! {
    #[test]
    fn total_and_count_match_lines(ops in prop::collection::vec(op(), 0..40)) {
        let mut cart = new_cart();
        for op in &ops {
            apply(&mut cart, op);
        }
        let expected_total: u64 = cart
            .items()
            .iter()
            .map(|i| i.unit_price.cents() * u64::from(i.quantity.get()))
            .sum();
        let expected_count: u64 = cart.items().iter().map(|i| u64::from(i.quantity.get())).sum();
        prop_assert_eq!(cart.total().unwrap(), Price::from_cents(expected_total));
        prop_assert_eq!(cart.item_count(), expected_count);
    }

    #[test]
    fn composite_keys_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
        let mut cart = new_cart();
        for op in &ops {
            apply(&mut cart, op);
        }
        let items = cart.items();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                prop_assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn repeated_adds_merge(q1 in 1i64..1000, q2 in 1i64..1000, product in 0..IDS.len()) {
        let mut cart = new_cart();
        cart.add_item(IDS[product], q1, "", "Chocolate").unwrap();
        cart.add_item(IDS[product], q2, "", "Chocolate").unwrap();
        prop_assert_eq!(cart.len(), 1);
        prop_assert_eq!(i64::from(cart.items()[0].quantity.get()), q1 + q2);
    }

    #[test]
    fn reopen_reproduces_sequence(ops in prop::collection::vec(op(), 0..30)) {
        let mut cart = new_cart();
        for op in &ops {
            apply(&mut cart, op);
        }
        let raw = cart.store().get("carrinho").unwrap();
        let store = match raw {
            Some(raw) => InMemoryKvStore::with_entry("carrinho", &raw),
            None => InMemoryKvStore::new(),
        };
        let reopened = CartStore::open(Catalog::bakery(), store, CartConfig::default());
        prop_assert_eq!(reopened.items(), cart.items());
    }
}
