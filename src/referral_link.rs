// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Referral links of the form `<page>?ref=<address>`

use alloy_primitives::Address;
use url::Url;

/// Query parameter carrying the referrer
pub const REF_PARAM: &str = "ref";

/// Link to `page_url` that registers `account` as referrer.
///
/// Any existing query or fragment of `page_url` is dropped.
///
/// ```
/// use alloy_primitives::Address;
/// use stakeflow::referral_link::{referral_link, referrer_from_url};
///
/// let page = "https://stake.example/app/?tab=stake#top".parse().unwrap();
/// let account = Address::repeat_byte(0xab);
/// let link = referral_link(&page, account);
/// assert!(link.as_str().starts_with("https://stake.example/app/?ref=0x"));
/// assert_eq!(referrer_from_url(&link), Some(account));
/// ```
pub fn referral_link(page_url: &Url, account: Address) -> Url {
    let mut link = page_url.clone();
    link.set_fragment(None);
    link.set_query(None);
    link.query_pairs_mut()
        .append_pair(REF_PARAM, &account.to_string());
    link
}

/// Referrer carried by `url`, if its `ref` parameter is a non-zero address.
pub fn referrer_from_url(url: &Url) -> Option<Address> {
    url.query_pairs()
        .find(|(key, _)| key == REF_PARAM)
        .and_then(|(_, value)| value.trim().parse::<Address>().ok())
        .filter(|address| !address.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_link_replaces_existing_query() {
        let account = address!("1111111111111111111111111111111111111111");
        let link = referral_link(&url("https://kjc.example/?ref=0xdead&x=1"), account);
        assert_eq!(
            link.as_str(),
            "https://kjc.example/?ref=0x1111111111111111111111111111111111111111"
        );
    }

    #[test]
    fn test_referrer_from_url() {
        let referrer = address!("d479ae350dc24168e8db863c5413c35fb2044ecd");
        assert_eq!(
            referrer_from_url(&url(
                "https://kjc.example/?foo=bar&ref=0xd479ae350dc24168e8db863c5413c35fb2044ecd"
            )),
            Some(referrer)
        );
    }

    #[test]
    fn test_referrer_from_url_rejects_invalid() {
        assert_eq!(referrer_from_url(&url("https://kjc.example/")), None);
        assert_eq!(referrer_from_url(&url("https://kjc.example/?ref=alice")), None);
        assert_eq!(referrer_from_url(&url("https://kjc.example/?ref=0x1234")), None);
        assert_eq!(
            referrer_from_url(&url(
                "https://kjc.example/?ref=0x0000000000000000000000000000000000000000"
            )),
            None
        );
    }
}
