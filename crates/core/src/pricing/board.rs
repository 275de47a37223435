//! Synchronous price recomputation for the import list.
//!
//! The console fetches USD rates once, then re-renders every product price
//! whenever a product's destination country changes. A [`PriceBoard`] holds
//! that one snapshot so repricing never awaits the network.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parse::parse_price;
use crate::currency::country::currency_by_country_name;
use crate::currency::exchange::RateMap;
use crate::currency::format::round_for_display;
use crate::currency::info::{CurrencyInfo, USD, currency_info};

/// Country used for products without a selection.
pub const DEFAULT_COUNTRY: &str = "United States";

/// A product as listed by the supplier, priced in USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPrice {
    /// Product identifier.
    pub id: String,
    /// Raw supplier price string, e.g. `"$12.99"`.
    pub price: String,
}

/// A price expressed in a destination country's currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalPrice {
    /// Currency code the price is in.
    pub currency: &'static str,
    /// Amount rounded to the currency's decimal digits.
    pub amount: Decimal,
    /// `symbol + amount` with fixed fraction digits.
    pub display: String,
}

/// Converts USD prices with a pre-fetched USD rate snapshot.
#[derive(Debug, Clone)]
pub struct PriceBoard {
    usd_rates: RateMap,
}

impl PriceBoard {
    /// Creates a board over rates relative to USD.
    #[must_use]
    pub fn new(usd_rates: RateMap) -> Self {
        Self { usd_rates }
    }

    /// Prices `usd_price` for a destination country.
    ///
    /// Without a rate for the country's currency the price stays in USD.
    #[must_use]
    pub fn display_price(&self, usd_price: Decimal, country_name: &str) -> LocalPrice {
        let target = currency_info(currency_by_country_name(country_name));

        let (currency, amount) = match self.usd_rates.get(target.code) {
            Some(rate) => match usd_price.checked_mul(*rate) {
                Some(amount) => (target, amount),
                None => (&USD, usd_price),
            },
            None => {
                debug!(currency = target.code, "No rate for currency, keeping USD price");
                (&USD, usd_price)
            }
        };

        local_price(currency, amount)
    }

    /// Reprices every product for its selected country.
    ///
    /// `selections` maps product id to country name; unselected products use
    /// [`DEFAULT_COUNTRY`]. Unparsable prices are left out.
    #[must_use]
    pub fn reprice(
        &self,
        products: &[ProductPrice],
        selections: &HashMap<String, String>,
    ) -> BTreeMap<String, LocalPrice> {
        products
            .iter()
            .filter_map(|product| {
                let Some(usd_price) = parse_price(&product.price) else {
                    debug!(product_id = %product.id, price = %product.price, "Unparsable price, skipping");
                    return None;
                };
                let country = selections
                    .get(&product.id)
                    .map_or(DEFAULT_COUNTRY, String::as_str);
                Some((product.id.clone(), self.display_price(usd_price, country)))
            })
            .collect()
    }
}

fn local_price(currency: &'static CurrencyInfo, amount: Decimal) -> LocalPrice {
    let digits = currency.decimal_digits;
    let amount = round_for_display(amount, digits);
    LocalPrice {
        currency: currency.code,
        amount,
        display: format!("{}{:.prec$}", currency.symbol, amount, prec = digits as usize),
    }
}
