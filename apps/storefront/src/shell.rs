//! # Storefront Shell
//!
//! A line-oriented driver over the commands: one text command per line,
//! one JSON response per command, notices echoed as `! ...` lines.
//!
//! ```text
//! > add coke
//! ! Offer applied: Free Coca-Cola x1
//! { "lines": [...], "freeItems": [...], "totals": {...}, ... }
//! > stock coke
//! { "productId": "coke", "available": 18 }
//! ```

use std::str::FromStr;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::commands::{cart, checkout, product};
use crate::error::{ApiError, ErrorCode};
use crate::state::{CartState, CatalogState, ConfigState};

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  products [category] [search...]   list products (category: all, drinks, fruit, bakery)
  search <text...>                  search every category
  product <id>                      show one product
  stock <id>                        units still addable
  cart                              show the cart
  add <id>                          add one unit
  inc <id> | dec <id>               change a line's quantity
  remove <id>                       take one unit out, dropping the line at zero
  delete <id>                       drop a line
  clear                             empty the cart
  checkout                          checkout summary
  offers                            current promotions
  quit                              leave";

// =============================================================================
// Command Parsing
// =============================================================================

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Products {
        category: Option<String>,
        search: Option<String>,
    },
    Product(String),
    Stock(String),
    Cart,
    Add(String),
    Increase(String),
    Decrease(String),
    Remove(String),
    Delete(String),
    Clear,
    Checkout,
    Offers,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let rest: Vec<&str> = words.collect();

        let id = || {
            rest.first()
                .map(|s| s.to_string())
                .ok_or_else(|| ApiError::validation(format!("'{}' needs a product id", verb)))
        };
        let text = |words: &[&str]| Some(words.join(" ")).filter(|s| !s.is_empty());

        let command = match verb.as_str() {
            "help" | "?" => ShellCommand::Help,
            "products" | "ls" => ShellCommand::Products {
                category: rest.first().map(|s| s.to_string()),
                search: rest.get(1..).and_then(text),
            },
            "search" => ShellCommand::Products {
                category: None,
                search: text(rest.as_slice()),
            },
            "product" | "show" => ShellCommand::Product(id()?),
            "stock" => ShellCommand::Stock(id()?),
            "cart" => ShellCommand::Cart,
            "add" => ShellCommand::Add(id()?),
            "inc" | "increase" => ShellCommand::Increase(id()?),
            "dec" | "decrease" => ShellCommand::Decrease(id()?),
            "remove" | "rm" => ShellCommand::Remove(id()?),
            "delete" | "del" => ShellCommand::Delete(id()?),
            "clear" => ShellCommand::Clear,
            "checkout" => ShellCommand::Checkout,
            "offers" => ShellCommand::Offers,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(ApiError::new(
                    ErrorCode::UnknownCommand,
                    format!("Unknown command '{}', try 'help'", other),
                ))
            }
        };

        Ok(command)
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// JSON body plus notice lines.
    Json {
        body: serde_json::Value,
        notices: Vec<String>,
    },
    /// Plain text (help).
    Text(String),
    /// End the session.
    Quit,
}

impl Reply {
    fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))?;
        Ok(Reply::Json {
            body,
            notices: Vec::new(),
        })
    }

    fn cart(response: cart::CartResponse) -> Result<Self, ApiError> {
        let notices = response.notices.iter().map(|n| n.message.clone()).collect();
        let body = serde_json::to_value(&response).map_err(|e| ApiError::internal(e.to_string()))?;
        Ok(Reply::Json { body, notices })
    }
}

/// All storefront state, driven one command at a time.
#[derive(Debug)]
pub struct Storefront {
    pub config: ConfigState,
    pub catalog: CatalogState,
    pub cart: CartState,
}

impl Storefront {
    pub fn new(config: ConfigState, catalog: CatalogState) -> Self {
        Storefront {
            config,
            catalog,
            cart: CartState::new(),
        }
    }

    /// Loads the catalog from the configured source and opens a session.
    pub async fn start(config: ConfigState) -> Self {
        let source = config.catalog_source();
        let catalog = CatalogState::load(&source).await;
        let storefront = Storefront::new(config, catalog);

        info!(
            session = %storefront.cart.session_id(),
            products = storefront.catalog.products().len(),
            load_failed = storefront.catalog.load_failed(),
            "Storefront ready"
        );
        storefront
    }

    /// Greeting line shown when the shell starts.
    pub fn banner(&self) -> String {
        if self.catalog.load_failed() {
            format!("{}: Failed to load products", self.config.store.name)
        } else {
            format!(
                "{}: {} products loaded, type 'help' for commands",
                self.config.store.name,
                self.catalog.products().len()
            )
        }
    }

    /// Runs one parsed command.
    pub fn execute(&mut self, command: ShellCommand) -> Result<Reply, ApiError> {
        let Storefront {
            config,
            catalog,
            cart: session,
        } = self;

        match command {
            ShellCommand::Help => Ok(Reply::Text(HELP.to_string())),
            ShellCommand::Quit => Ok(Reply::Quit),
            ShellCommand::Products { category, search } => Reply::json(&product::list_products(
                catalog,
                config,
                category.as_deref(),
                search.as_deref(),
            )),
            ShellCommand::Product(id) => Reply::json(&product::get_product(catalog, config, &id)?),
            ShellCommand::Stock(id) => {
                Reply::json(&product::get_available_stock(catalog, session, &id)?)
            }
            ShellCommand::Cart => Reply::cart(cart::get_cart(session, config)),
            ShellCommand::Add(id) => Reply::cart(cart::add_to_cart(catalog, session, config, &id)?),
            ShellCommand::Increase(id) => Reply::cart(cart::increase_quantity(session, config, &id)),
            ShellCommand::Decrease(id) => Reply::cart(cart::decrease_quantity(session, config, &id)),
            ShellCommand::Remove(id) => Reply::cart(cart::remove_from_cart(session, config, &id)),
            ShellCommand::Delete(id) => Reply::cart(cart::delete_from_cart(session, config, &id)),
            ShellCommand::Clear => Reply::cart(cart::clear_cart(session, config)),
            ShellCommand::Checkout => Reply::json(&checkout::get_checkout(session, config)),
            ShellCommand::Offers => Reply::json(&checkout::list_offers(session)),
        }
    }

    /// Parses and runs one input line; blank lines produce nothing.
    pub fn execute_line(&mut self, line: &str) -> Option<Result<Reply, ApiError>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!(line = %line, "Shell input");
        Some(line.parse().and_then(|command| self.execute(command)))
    }
}

// =============================================================================
// I/O Loop
// =============================================================================

/// Reads commands from `input` until EOF or `quit`, writing replies to
/// `output`.
pub async fn run_shell<R, W>(storefront: &mut Storefront, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("{}\n", storefront.banner()).as_bytes())
        .await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let text = match storefront.execute_line(&line) {
            None => continue,
            Some(Ok(Reply::Quit)) => break,
            Some(Ok(Reply::Text(text))) => text,
            Some(Ok(Reply::Json { body, notices })) => {
                let mut text: String = notices.iter().map(|n| format!("! {}\n", n)).collect();
                text.push_str(&pretty(&body));
                text
            }
            Some(Err(err)) => pretty(&err),
        };

        output.write_all(text.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    Ok(())
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{catalog, config};

    fn storefront() -> Storefront {
        Storefront::new(config(), catalog())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("help".parse::<ShellCommand>().unwrap(), ShellCommand::Help);
        assert_eq!(
            "products drinks diet cola".parse::<ShellCommand>().unwrap(),
            ShellCommand::Products {
                category: Some("drinks".to_string()),
                search: Some("diet cola".to_string()),
            }
        );
        assert_eq!(
            "search  sweet ".parse::<ShellCommand>().unwrap(),
            ShellCommand::Products {
                category: None,
                search: Some("sweet".to_string()),
            }
        );
        assert_eq!(
            "ADD coke".parse::<ShellCommand>().unwrap(),
            ShellCommand::Add("coke".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        let err = "add".parse::<ShellCommand>().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = "buy coke".parse::<ShellCommand>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_execute_line_flow() {
        let mut store = storefront();
        assert!(store.execute_line("   ").is_none());

        for _ in 0..5 {
            store.execute_line("add coke").unwrap().unwrap();
        }
        match store.execute_line("add coke").unwrap().unwrap() {
            Reply::Json { body, notices } => {
                assert_eq!(notices, ["Offer applied: Free Coca-Cola x1"]);
                assert_eq!(body["appliedOffers"]["coke"], true);
            }
            other => panic!("unexpected reply {:?}", other),
        }

        let err = store.execute_line("add ghost").unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_banner_reports_failed_load() {
        let store = Storefront::new(config(), CatalogState::from(grocery_catalog::CatalogLoad::failed()));
        assert_eq!(store.banner(), "Grocery Store: Failed to load products");
        assert!(storefront().banner().contains("4 products loaded"));
    }

    #[tokio::test]
    async fn test_run_shell_script() {
        let mut store = storefront();
        let script = b"add water\nadd water\nadd water\n\nstock water\nbogus\nquit\nadd coke\n";
        let mut output = Vec::new();

        run_shell(&mut store, &script[..], &mut output).await.unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("Grocery Store: 4 products loaded"));
        assert!(output.contains("! Still Water is out of stock"));
        assert!(output.contains("\"available\": 0"));
        assert!(output.contains("UNKNOWN_COMMAND"));
        // Nothing after quit runs.
        assert_eq!(store.cart.with_session(|s| s.cart().quantity_of("coke")), 0);
    }
}
