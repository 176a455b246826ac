use crate::category::Category;

/// Tokens whose artwork ships as separate `-lightmode` / `-darkmode` files
const SPECIAL_TOKENS: &[&str] = &["ALGO", "APT", "NEAR", "SUI", "WLD", "XRP"];

const SPECIAL_WALLETS: &[&str] = &["Ledger", "OKX", "Rabby"];

const SPECIAL_SYSTEMS: &[&str] = &["Aptos", "Jito", "Near", "Sui", "Uniswap"];

/// Names that have distinct light-mode and dark-mode artwork, per category.
///
/// Every other name reuses a single artwork file for both modes.
#[derive(Debug, Clone)]
pub struct SpecialIconRegistry {
    tokens: Vec<String>,
    wallets: Vec<String>,
    systems: Vec<String>,
}

impl SpecialIconRegistry {
    /// Registry compiled into the binary
    pub fn builtin() -> Self {
        let owned = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        Self {
            tokens: owned(SPECIAL_TOKENS),
            wallets: owned(SPECIAL_WALLETS),
            systems: owned(SPECIAL_SYSTEMS),
        }
    }

    /// Registry with no special names
    pub fn empty() -> Self {
        Self {
            tokens: Vec::new(),
            wallets: Vec::new(),
            systems: Vec::new(),
        }
    }

    pub fn with(mut self, category: Category, name: impl Into<String>) -> Self {
        self.names_mut(category).push(name.into());
        self
    }

    pub fn is_special(&self, category: Category, name: &str) -> bool {
        self.names(category).iter().any(|n| n == name)
    }

    fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Token => &self.tokens,
            Category::Wallet => &self.wallets,
            Category::System => &self.systems,
        }
    }

    fn names_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Token => &mut self.tokens,
            Category::Wallet => &mut self.wallets,
            Category::System => &mut self.systems,
        }
    }
}

impl Default for SpecialIconRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
