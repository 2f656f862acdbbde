//! Static product lookup table.

use std::collections::HashMap;

use crate::error::{TypeError, TypeResult};
use crate::price::Price;
use crate::product::{Product, ProductId};

/// Read-only mapping from [`ProductId`] to [`Product`].
///
/// Products keep the order they were supplied in. The catalog is fixed once
/// built; there are no mutation operations.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and prices that are zero or
    /// above [`Price::MAX`].
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> TypeResult<Self> {
        let mut catalog = Self::default();
        for product in products {
            if product.unit_price.is_zero() {
                return Err(TypeError::InvalidPrice(format!(
                    "{} has a zero price",
                    product.id
                )));
            }
            product.unit_price.check_persistable()?;
            if catalog.index.contains_key(&product.id) {
                return Err(TypeError::DuplicateProduct(product.id));
            }
            catalog
                .index
                .insert(product.id.clone(), catalog.products.len());
            catalog.products.push(product);
        }
        Ok(catalog)
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> TypeResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| TypeError::Serialization(e.to_string()))?;
        Self::from_products(products)
    }

    /// The storefront's built-in cake catalog.
    pub fn bakery() -> Self {
        const PHOTO: &str = "https://images.unsplash.com/photo-";
        const CROP: &str = "?w=400&h=300&fit=crop";
        let entries = [
            (
                "bolo-classico",
                "Bolo Clássico",
                70,
                "1578985545062-69928b1d9587",
                "Chocolate, Baunilha, Cenoura",
            ),
            (
                "bolo-recheado",
                "Bolo Recheado",
                90,
                "1565958011703-44f9829ba187",
                "Brigadeiro, Doce de Leite, Ninho com Morango",
            ),
            (
                "bolo-gelado",
                "Bolo Gelado",
                85,
                "1621303837174-89787a7d4729",
                "Coco, Abacaxi, Limão",
            ),
            (
                "bolo-personalizado",
                "Bolo Decorado Personalizado",
                120,
                "1587668178277-295251f900ce",
                "Tema infantil, casamento, aniversário",
            ),
            (
                "bolo-fit",
                "Bolo Fit/Integral",
                95,
                "1606313564200-e75d5e30476c",
                "Banana com Aveia, Cacau 70%",
            ),
        ];
        let mut catalog = Self::default();
        for (id, name, reais, photo, flavors) in entries {
            let image = format!("{PHOTO}{photo}{CROP}");
            let product = Product::new(id, name, Price::from_reais(reais), image, flavors);
            catalog.index.insert(product.id.clone(), catalog.products.len());
            catalog.products.push(product);
        }
        catalog
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bakery_has_five_cakes_in_order() {
        let catalog = Catalog::bakery();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["bolo-classico", "bolo-recheado", "bolo-gelado", "bolo-personalizado", "bolo-fit"]
        );
    }

    #[test]
    fn bakery_lookup() {
        let catalog = Catalog::bakery();
        let classico = catalog.get("bolo-classico").unwrap();
        assert_eq!(classico.unit_price, Price::from_reais(70));
        assert_eq!(classico.flavor_options, vec!["Chocolate", "Baunilha", "Cenoura"]);
        assert!(classico.image_ref.ends_with("?w=400&h=300&fit=crop"));
        assert!(catalog.get("torta-de-limao").is_none());
        assert!(!catalog.contains("torta-de-limao"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let p = Product::new("a", "A", Price::from_reais(1), "", "");
        let err = Catalog::from_products([p.clone(), p]).unwrap_err();
        assert_eq!(err, TypeError::DuplicateProduct(ProductId::new("a")));
    }

    #[test]
    fn zero_price_rejected() {
        let p = Product::new("a", "A", Price::ZERO, "", "");
        assert!(matches!(
            Catalog::from_products([p]),
            Err(TypeError::InvalidPrice(_))
        ));
    }

    #[test]
    fn price_bound_enforced() {
        let at_max = Product::new("a", "A", Price::MAX, "", "");
        assert!(Catalog::from_products([at_max]).is_ok());

        let above = Product::new("b", "B", Price::from_cents(10u64.pow(16)), "", "");
        assert!(matches!(
            Catalog::from_products([above]),
            Err(TypeError::InvalidPrice(_))
        ));
    }

    #[test]
    fn from_json_parses_wire_fields() {
        let json = r#"[
            {"id":"torta","nome":"Torta","preco":42.5,"imagem":"t.png","sabores":"Limão, Maracujá"},
            {"id":"pudim","nome":"Pudim","preco":30,"imagem":"p.png","sabores":""}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("torta").unwrap().unit_price.cents(), 4250);
        assert!(catalog.get("pudim").unwrap().flavor_options.is_empty());
    }

    #[test]
    fn from_json_reports_bad_input() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(TypeError::Serialization(_))
        ));
    }
}
