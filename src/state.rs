use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Order, StdResult, Storage};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Floor price of a name nobody owns yet. `None` means any positive bid wins.
    pub purchase_price: Option<Coin>,
}

/// The record a registered name resolves to.
///
/// `Whois::default()` (no owner, empty price) is what an absent name looks like.
#[cw_serde]
#[derive(Default)]
pub struct Whois {
    pub value: String,
    pub owner: Option<Addr>,
    pub price: Vec<Coin>,
}

#[cw_serde]
pub struct Product {
    pub product_id: String,
    pub description: String,
    pub price: Vec<Coin>,
    pub owner: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

// Map keys are the length-prefixed namespace followed by the raw identifier,
// so the two namespaces never overlap whatever bytes a name or id contains.
pub const NAMES: Map<&str, Whois> = Map::new("name");
pub const PRODUCTS: Map<&str, Product> = Map::new("product");

pub fn may_load_whois(storage: &dyn Storage, name: &str) -> StdResult<Option<Whois>> {
    NAMES.may_load(storage, name)
}

pub fn load_whois(storage: &dyn Storage, name: &str) -> StdResult<Whois> {
    Ok(may_load_whois(storage, name)?.unwrap_or_default())
}

pub fn has_name(storage: &dyn Storage, name: &str) -> bool {
    NAMES.has(storage, name)
}

pub fn save_whois(storage: &mut dyn Storage, name: &str, whois: &Whois) -> StdResult<()> {
    NAMES.save(storage, name, whois)
}

pub fn remove_whois(storage: &mut dyn Storage, name: &str) {
    NAMES.remove(storage, name)
}

/// All registered names in ascending key order.
pub fn names(storage: &dyn Storage) -> StdResult<Vec<String>> {
    NAMES
        .keys(storage, None, None, Order::Ascending)
        .collect()
}

pub fn may_load_product(storage: &dyn Storage, product_id: &str) -> StdResult<Option<Product>> {
    PRODUCTS.may_load(storage, product_id)
}

pub fn has_product(storage: &dyn Storage, product_id: &str) -> bool {
    PRODUCTS.has(storage, product_id)
}

pub fn save_product(storage: &mut dyn Storage, product: &Product) -> StdResult<()> {
    PRODUCTS.save(storage, &product.product_id, product)
}

pub fn remove_product(storage: &mut dyn Storage, product_id: &str) {
    PRODUCTS.remove(storage, product_id)
}

/// All products in ascending key order.
pub fn products(storage: &dyn Storage) -> StdResult<Vec<Product>> {
    PRODUCTS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, product)| product))
        .collect()
}

/// Raw store key of a product record.
pub fn product_key(product_id: &str) -> Vec<u8> {
    PRODUCTS.key(product_id).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coins;
    use cosmwasm_std::testing::MockStorage;

    fn product(id: &str, owner: &str) -> Product {
        Product {
            product_id: id.to_string(),
            description: format!("{} description", id),
            price: coins(10, "usd"),
            owner: Addr::unchecked(owner),
        }
    }

    #[test]
    fn absent_name_loads_as_zero_record() {
        let storage = MockStorage::new();
        assert_eq!(load_whois(&storage, "nobody").unwrap(), Whois::default());
        assert!(!has_name(&storage, "nobody"));
    }

    #[test]
    fn product_key_is_namespaced() {
        let key = product_key("p1");
        assert_eq!(key, [&[0u8, 7][..], b"product", b"p1"].concat());
    }

    #[test]
    fn namespaces_do_not_leak_into_each_other() {
        let mut storage = MockStorage::new();
        save_product(&mut storage, &product("a-b", "alice")).unwrap();
        save_product(&mut storage, &product("zz", "alice")).unwrap();
        // a name that looks like a product key must stay a name
        let whois = Whois {
            value: "x".to_string(),
            owner: Some(Addr::unchecked("bob")),
            price: coins(1, "usd"),
        };
        save_whois(&mut storage, "product-zzz", &whois).unwrap();
        save_whois(&mut storage, "productx", &whois).unwrap();

        let ids: Vec<String> = products(&storage)
            .unwrap()
            .into_iter()
            .map(|p| p.product_id)
            .collect();
        assert_eq!(ids, vec!["a-b".to_string(), "zz".to_string()]);
        assert_eq!(
            names(&storage).unwrap(),
            vec!["product-zzz".to_string(), "productx".to_string()]
        );
    }

    #[test]
    fn remove_product_deletes_key() {
        let mut storage = MockStorage::new();
        save_product(&mut storage, &product("p1", "alice")).unwrap();
        assert!(has_product(&storage, "p1"));
        remove_product(&mut storage, "p1");
        assert!(!has_product(&storage, "p1"));
        assert_eq!(may_load_product(&storage, "p1").unwrap(), None);
    }
}
