// Compile-time configuration for the target network
pub const NETWORK: &'static str = if cfg!(feature = "mainnet") {
    "mainnet"
} else if cfg!(feature = "testnet") {
    "testnet"
} else {
    "devnet"
};

/// Path prefix the app is served under. Browser pathnames are matched relative to it.
pub const BASE_URL: &str = "/movement-interface";

/// Asset pre-selected on the "from" side when a URL names none.
pub const DEFAULT_INPUT: &'static str = "MOVE";

// NOTE: devnet only ships the native coin, so both sides of the default pair are the same asset.
pub const DEFAULT_OUTPUT: &'static str = if cfg!(feature = "mainnet") {
    "0x1::usdc::USDC"
} else if cfg!(feature = "testnet") {
    "0x2::usdc::USDC"
} else {
    "MOVE"
};

pub const MAINNET_FLAGS: &str = include_str!("../flags/mainnet.json");
pub const TESTNET_FLAGS: &str = include_str!("../flags/testnet.json");
pub const DEVNET_FLAGS: &str = include_str!("../flags/devnet.json");

pub const FLAGS_JSON: &str = if cfg!(feature = "mainnet") {
    MAINNET_FLAGS
} else if cfg!(feature = "testnet") {
    TESTNET_FLAGS
} else {
    DEVNET_FLAGS
};

/// Query string keys understood by the swap page.
pub mod query_keys {
    pub const INPUT_CURRENCY: &str = "inputCurrency";
    pub const OUTPUT_CURRENCY: &str = "outputCurrency";
    pub const EXACT_AMOUNT: &str = "exactAmount";
    pub const EXACT_FIELD: &str = "exactField";
    pub const RECIPIENT: &str = "recipient";

    pub const SWAP: &[&str] = &[
        INPUT_CURRENCY,
        OUTPUT_CURRENCY,
        EXACT_AMOUNT,
        EXACT_FIELD,
        RECIPIENT,
    ];

    pub const THEME: &str = "theme";
}

pub const THEME_STORAGE_KEY: &str = "interface_theme";
