//! The quick start card set.

use crate::card::CardSpec;
use crate::icon::IconKind;
use crate::links::LinkRegistry;

/// The four quick start cards, in display order.
pub fn quick_start_cards(links: &LinkRegistry) -> Vec<CardSpec> {
    vec![
        CardSpec::new(
            "Get API key",
            "Experience seamless integration with our API by getting your API key.",
            links.internal.authentication.clone(),
        )
        .with_icon(IconKind::Key),
        CardSpec::new(
            "Develop with API",
            "Call our HTTP endpoints directly from any language, including Python, Javascript, and more.",
            links.external.api_reference.clone(),
        )
        .with_icon(IconKind::Code),
        CardSpec::new(
            "Develop with TypeScript SDK",
            "Get started with our Javascript/Typescript SDKs.",
            links.internal.typescript_sdk.clone(),
        )
        .with_icon(IconKind::TypeScript),
        CardSpec::new(
            "Upgrade subscription",
            "Unlock more images and features by upgrading your subscription.",
            links.external.pricing.clone(),
        )
        .with_icon(IconKind::Premium),
    ]
}
