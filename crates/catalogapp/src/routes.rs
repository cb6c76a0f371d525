//! Hash-route table for the catalog pages.
//!
//! | Hash          | Page                 |
//! |---------------|----------------------|
//! | `#/` or empty | [`Page::Home`]       |
//! | `#/usuarios`  | [`Page::Usuarios`]   |
//! | `#/produtos`  | [`Page::Produtos`]   |
//! | `#/contato`   | [`Page::Contato`]    |
//!
//! Anything else falls back to the home page.

use crate::validation::FormId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Usuarios,
    Produtos,
    Contato,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Usuarios, Page::Produtos, Page::Contato];

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Usuarios => "usuarios",
            Page::Produtos => "produtos",
            Page::Contato => "contato",
        }
    }

    /// Canonical route, without the leading `#`.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Usuarios => "/usuarios",
            Page::Produtos => "/produtos",
            Page::Contato => "/contato",
        }
    }

    pub fn template_id(self) -> String {
        format!("template-{}", self.name())
    }

    /// The form rendered on this page, if it has one.
    pub fn form(self) -> Option<FormId> {
        match self {
            Page::Home => None,
            Page::Usuarios => Some(FormId::User),
            Page::Produtos => Some(FormId::Product),
            Page::Contato => Some(FormId::Contact),
        }
    }
}

/// Maps a location hash (`"#/produtos"`, `"/produtos"`, `""`) to its page.
pub fn resolve(hash: &str) -> Page {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    if path.is_empty() {
        return Page::Home;
    }
    Page::ALL
        .into_iter()
        .find(|page| page.path() == path)
        .unwrap_or(Page::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_routes() {
        assert_eq!(resolve("#/"), Page::Home);
        assert_eq!(resolve("#/usuarios"), Page::Usuarios);
        assert_eq!(resolve("#/produtos"), Page::Produtos);
        assert_eq!(resolve("/contato"), Page::Contato);
    }

    #[test]
    fn empty_and_unknown_fall_back_to_home() {
        assert_eq!(resolve(""), Page::Home);
        assert_eq!(resolve("#"), Page::Home);
        assert_eq!(resolve("#/carrinho"), Page::Home);
    }

    #[test]
    fn every_page_round_trips_through_its_path() {
        for page in Page::ALL {
            assert_eq!(resolve(&format!("#{}", page.path())), page);
        }
    }

    #[test]
    fn template_ids_and_forms() {
        assert_eq!(Page::Produtos.template_id(), "template-produtos");
        assert_eq!(Page::Home.form(), None);
        assert_eq!(Page::Contato.form(), Some(FormId::Contact));
    }
}
