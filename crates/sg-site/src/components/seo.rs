//! Per-page head tags and structured data

use leptos::*;
use leptos_meta::*;
use sg_core::fixtures::BUSINESS;
use sg_core::seo::{jsonld, page, MetaTag};
use sg_core::{CoreResult, SiteConfig};

use crate::context::use_site_context;

/// A `<script type="application/ld+json">` block
#[component]
pub fn JsonLd(value: serde_json::Value) -> impl IntoView {
    jsonld::to_script(&value).map(|script| {
        view! { <script type="application/ld+json" inner_html=script></script> }
    })
}

fn meta_tag(tag: MetaTag) -> View {
    match tag {
        MetaTag::Name { name, content } => view! { <Meta name=name content=content/> }.into_view(),
        MetaTag::Property { property, content } => {
            view! { <Meta property=property content=content/> }.into_view()
        }
    }
}

fn page_head(path: &str, config: &SiteConfig) -> CoreResult<View> {
    let meta = page(path)?;
    let tags = meta
        .tags(&BUSINESS, config)
        .into_iter()
        .map(meta_tag)
        .collect_view();
    let breadcrumbs = jsonld::breadcrumb_list(&meta.breadcrumbs(), config);

    Ok(view! {
        <Title text=meta.full_title(&BUSINESS)/>
        <Link rel="canonical" href=meta.canonical(config)/>
        {tags}
        <JsonLd value=breadcrumbs/>
    }
    .into_view())
}

/// Title, description, canonical link, social cards and the breadcrumb
/// trail for a route. Unknown paths surface through the error boundary.
#[component]
pub fn PageSeo(path: &'static str) -> impl IntoView {
    let ctx = use_site_context();
    page_head(path, &ctx.config)
}
