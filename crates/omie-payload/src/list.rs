//! Paginated listing page.

use omie_core::error::ImportError;
use omie_core::format;

use crate::payload::{body_object, Payload};

/// One page of a paginated listing response.
///
/// Pure data; fetching the next page is a transport concern.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    page: i64,
    total_pages: i64,
    records: i64,
    total_records: i64,
    items: Vec<T>,
}

impl<T> ListPage<T> {
    /// Create a page from its counters and items.
    pub fn new(page: i64, total_pages: i64, records: i64, total_records: i64, items: Vec<T>) -> Self {
        Self {
            page,
            total_pages,
            records,
            total_records,
            items,
        }
    }

    /// The 1-based page number.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Total number of pages in the listing.
    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// Number of records in this page.
    pub fn records(&self) -> i64 {
        self.records
    }

    /// Total number of records across all pages.
    pub fn total_records(&self) -> i64 {
        self.total_records
    }

    /// The items of this page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Whether more pages follow this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Payload> ListPage<T> {
    /// Import a page from a listing response body.
    ///
    /// `list_key` names the array of records (e.g. `lista_cidades`); a
    /// missing or null array yields an empty page. An entry that fails to
    /// import fails the whole page.
    pub fn import(body: &serde_json::Value, list_key: &str) -> Result<Self, ImportError> {
        let obj = body_object(body)?;

        let counter = |key: &str| {
            obj.get(key)
                .map(format::int_of)
                .unwrap_or(0)
        };

        let mut items = Vec::new();
        if let Some(serde_json::Value::Array(entries)) = obj.get(list_key) {
            for entry in entries {
                items.push(T::import(entry)?);
            }
        }

        Ok(Self::new(
            counter("pagina"),
            counter("total_de_paginas"),
            counter("registros"),
            counter("total_de_registros"),
            items,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::CityPayload;

    #[test]
    fn import_reads_counters_and_items() {
        let body = serde_json::json!({
            "pagina": 1,
            "total_de_paginas": 3,
            "registros": 2,
            "total_de_registros": 6,
            "lista_cidades": [
                { "cCod": "SAO PAULO (SP)", "cNome": "São Paulo", "cUF": "SP",
                  "nCodIBGE": 3550308, "nCodSIAFI": 7107 },
                { "cCod": "CAMPINAS (SP)", "cNome": "Campinas", "cUF": "SP",
                  "nCodIBGE": 3509502, "nCodSIAFI": 6291 },
            ],
        });
        let page: ListPage<CityPayload> = ListPage::import(&body, "lista_cidades").unwrap();
        assert_eq!(page.page(), 1);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.total_records(), 6);
        assert_eq!(page.items().len(), 2);
        assert!(page.has_next());
        assert_eq!(page.items()[1].name(), "Campinas");
    }

    #[test]
    fn missing_list_yields_an_empty_page() {
        let body = serde_json::json!({ "pagina": 1, "total_de_paginas": 1 });
        let page: ListPage<CityPayload> = ListPage::import(&body, "lista_cidades").unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn a_bad_entry_fails_the_whole_page() {
        let body = serde_json::json!({
            "pagina": 1,
            "lista_cidades": [ { "cCod": "X" } ],
        });
        let err = ListPage::<CityPayload>::import(&body, "lista_cidades").unwrap_err();
        assert_eq!(err, ImportError::missing("cNome"));
    }
}
