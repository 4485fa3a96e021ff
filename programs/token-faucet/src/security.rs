#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Token Faucet program",
    project_url: "https://github.com/faucet-token/faucet-token-solana",
    contacts: "email:security@faucet-token.dev",
    policy: "https://github.com/faucet-token/faucet-token-solana/blob/main/SECURITY.md",
    source_code: "https://github.com/faucet-token/faucet-token-solana"
}
