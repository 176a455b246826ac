use std::fmt;

/// The three kinds of icons managed in a generated icon map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Token,
    Wallet,
    System,
}

impl Category {
    /// Group order inside the icon map
    pub const ALL: [Category; 3] = [Category::Token, Category::Wallet, Category::System];

    /// Name of the image helper the generated expressions call
    pub fn helper(self) -> &'static str {
        match self {
            Category::Token => "baseImgUrlToken",
            Category::Wallet => "baseImgUrlWallet",
            Category::System => "baseImgUrlSystem",
        }
    }

    /// Parameter name used in the helper definition
    pub fn helper_param(self) -> &'static str {
        match self {
            Category::Token => "nameToken",
            Category::Wallet => "nameWallet",
            Category::System => "nameSystem",
        }
    }

    /// Path segment under the image base URL
    pub fn image_segment(self) -> &'static str {
        match self {
            Category::Token => "token",
            Category::Wallet => "wallet",
            Category::System => "system",
        }
    }

    /// Comment line that opens this category's group in the icon map
    pub fn placeholder(self) -> &'static str {
        match self {
            Category::Token => "// Token icons will be added here",
            Category::Wallet => "// Wallet icons will be added here",
            Category::System => "// System icons will be added here",
        }
    }

    /// Name of the generated enum listing this category's icons
    pub fn enum_name(self) -> &'static str {
        match self {
            Category::Token => "TokenSymbol",
            Category::Wallet => "WalletName",
            Category::System => "SystemName",
        }
    }

    /// Identifier shown in the example comment of an empty enum
    pub fn sample_name(self) -> &'static str {
        match self {
            Category::Token => "BTC",
            Category::Wallet => "MetaMask",
            Category::System => "Ethereum",
        }
    }

    /// Directory reserved for this category inside the target directory
    pub fn directory(self) -> &'static str {
        match self {
            Category::Token => "tokens",
            Category::Wallet => "wallets",
            Category::System => "systems",
        }
    }

    /// Classify a lookup expression by the helper it invokes
    pub fn from_expression(expr: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| {
            expr.trim_start()
                .strip_prefix(category.helper())
                .is_some_and(|rest| rest.trim_start().starts_with('('))
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Token => "token",
            Category::Wallet => "wallet",
            Category::System => "system",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_expression() {
        assert_eq!(
            Category::from_expression(r#"baseImgUrlToken("BTC")"#),
            Some(Category::Token)
        );
        assert_eq!(
            Category::from_expression(r#"  baseImgUrlSystem ("Jito-darkmode")"#),
            Some(Category::System)
        );
        assert_eq!(
            Category::from_expression(r#"baseImgUrlWallet("MetaMask")"#),
            Some(Category::Wallet)
        );
        assert_eq!(Category::from_expression(r#""/images/btc.png""#), None);
        assert_eq!(Category::from_expression("baseImgUrlTokenX(\"A\")"), None);
    }
}
