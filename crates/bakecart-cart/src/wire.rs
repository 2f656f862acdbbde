//! Persisted cart format.
//!
//! The cart is stored as a JSON array of line items, in cart order:
//! ```text
//! [{"id":"bolo-classico","nome":"Bolo Clássico","preco":70,"imagem":"...",
//!   "quantidade":3,"sabor":"Chocolate","observacoes":"","sabores":"Chocolate, Baunilha, Cenoura"}]
//! ```
//! There is no version field and no migration.

use std::num::NonZeroU32;

use bakecart_types::LineItem;

use crate::error::{CartError, CartResult};

/// Serialize the item sequence.
pub fn encode_items(items: &[LineItem]) -> CartResult<String> {
    serde_json::to_string(items).map_err(|e| CartError::Serialization(e.to_string()))
}

/// Parse a persisted item sequence.
///
/// Entries that share a composite key are folded into the first occurrence,
/// so a hand-edited slot cannot break the one-line-per-key rule.
pub fn decode_items(raw: &str) -> CartResult<Vec<LineItem>> {
    let parsed: Vec<LineItem> =
        serde_json::from_str(raw).map_err(|e| CartError::Serialization(e.to_string()))?;

    let mut items: Vec<LineItem> = Vec::with_capacity(parsed.len());
    for item in parsed {
        match items.iter_mut().find(|existing| existing.matches(&item.key())) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .get()
                    .checked_add(item.quantity.get())
                    .and_then(NonZeroU32::new)
                    .ok_or_else(|| CartError::QuantityOverflow {
                        product_id: item.product_id.clone(),
                    })?;
            }
            None => items.push(item),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakecart_types::Catalog;

    fn item(id: &str, qty: u32, flavor: &str) -> LineItem {
        let catalog = Catalog::bakery();
        LineItem::snapshot(
            catalog.get(id).unwrap(),
            NonZeroU32::new(qty).unwrap(),
            flavor,
            "",
        )
    }

    #[test]
    fn encode_preserves_order() {
        let items = vec![item("bolo-fit", 1, ""), item("bolo-gelado", 2, "Coco")];
        let raw = encode_items(&items).unwrap();
        assert!(raw.find("bolo-fit").unwrap() < raw.find("bolo-gelado").unwrap());
        assert_eq!(decode_items(&raw).unwrap(), items);
    }

    #[test]
    fn decodes_storefront_json() {
        let raw = r#"[{"id":"bolo-classico","nome":"Bolo Clássico","preco":70,
            "imagem":"https://example.test/a.jpg","quantidade":2,"sabor":"Chocolate",
            "observacoes":"","sabores":"Chocolate, Baunilha, Cenoura"}]"#;
        let items = decode_items(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity.get(), 2);
        assert_eq!(items[0].selected_flavor, "Chocolate");
        assert_eq!(items[0].flavor_options.len(), 3);
    }

    #[test]
    fn duplicate_keys_are_folded() {
        let items = vec![
            item("bolo-fit", 1, "Cacau 70%"),
            item("bolo-gelado", 1, ""),
            item("bolo-fit", 4, "Cacau 70%"),
        ];
        let raw = serde_json::to_string(&items).unwrap();
        let decoded = decode_items(&raw).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].quantity.get(), 5);
        assert_eq!(decoded[1].product_id.as_str(), "bolo-gelado");
    }

    #[test]
    fn rejects_malformed() {
        assert!(decode_items("{").is_err());
        assert!(decode_items(r#"{"id":"bolo-fit"}"#).is_err());
        assert!(decode_items(r#"[{"id":"bolo-fit"}]"#).is_err());
    }

    #[test]
    fn empty_array_is_empty_cart() {
        assert!(decode_items("[]").unwrap().is_empty());
    }
}
