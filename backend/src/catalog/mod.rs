use std::path::Path;

use indexmap::IndexMap;
use tracing::info;

use crate::error::CatalogError;
use crate::models::Product;
use crate::seed;

/// Immutable, ordered product catalog keyed by id.
///
/// Built once at startup and shared read-only behind an `Arc`; there is no
/// mutation API, so concurrent handlers need no locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: IndexMap<u64, Product>,
}

impl Catalog {
    /// Validates every record and rejects duplicate ids. Definition order is kept.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut map = IndexMap::with_capacity(products.len());
        for product in products {
            product.validate()?;
            let id = product.id;
            if map.insert(id, product).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        Ok(Self { products: map })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_products(seed::default_products())
    }

    /// Reads a JSON array of products.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_products(products)
    }

    /// File catalog when a path is configured, built-in otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                info!(path = %path.display(), "Loading catalog from file");
                Self::from_json_file(path)?
            }
            None => Self::builtin()?,
        };
        info!(count = catalog.len(), "Catalog ready");
        Ok(catalog)
    }

    /// Every product in definition order.
    pub fn list_all(&self) -> impl ExactSizeIterator<Item = &Product> {
        self.products.values()
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Product> {
        self.products.get(&id)
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
    use std::path::PathBuf;

    fn make(id: u64, name: &str) -> Product {
        Product::new(id, name, 10.0, "shirt.png", "", "misc")
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mnml-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    // ── Construction ───────────────────────────────────────────────────────────

    #[test]
    fn builtin_has_six_products() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = Catalog::from_products(vec![make(1, "A"), make(2, "B"), make(1, "C")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn invalid_record_rejected() {
        let err = Catalog::from_products(vec![make(1, "A"), make(2, "")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName(2)));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::from_products(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.list_all().count(), 0);
    }

    // ── Lookups ────────────────────────────────────────────────────────────────

    #[test]
    fn list_all_keeps_definition_order() {
        let catalog =
            Catalog::from_products(vec![make(30, "Zed"), make(4, "Alpha"), make(12, "Mid")])
                .unwrap();
        let ids: Vec<u64> = catalog.list_all().map(|p| p.id).collect();
        assert_eq!(ids, vec![30, 4, 12]);
    }

    #[test]
    fn get_by_id_hits_every_builtin_product() {
        let catalog = Catalog::builtin().unwrap();
        for id in 1..=6 {
            assert_eq!(catalog.get_by_id(id).map(|p| p.id), Some(id));
        }
        assert_eq!(catalog.get_by_id(1).unwrap().name, "Essential Tee");
    }

    #[test]
    fn get_by_id_misses_unknown_ids() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get_by_id(0).is_none());
        assert!(catalog.get_by_id(7).is_none());
        assert!(catalog.get_by_id(u64::MAX).is_none());
    }

    // ── File source ────────────────────────────────────────────────────────────

    #[test]
    fn loads_catalog_from_json_file() {
        let path = temp_file(
            "ok.json",
            r#"[{"id":9,"name":"Beanie","price":12.5,"image":"beanie.png","description":"Knit","category":"accessories"}]"#,
        );
        let catalog = Catalog::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_by_id(9).unwrap().category, "accessories");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = temp_file("bad.json", r#"{"id": 1}"#);
        let err = Catalog::from_json_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Catalog::from_json_file(Path::new("/nonexistent/mnml/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn load_without_path_uses_builtin() {
        assert_eq!(Catalog::load(None).unwrap().len(), 6);
    }
}
