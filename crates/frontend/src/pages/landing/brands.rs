use leptos::prelude::*;

use crate::shared::components::SectionHeader;

struct BrandGroup {
    title: &'static str,
    brands: &'static [&'static str],
}

/// The first brand of the lighting group is the flagship dealership
const GROUPS: [BrandGroup; 3] = [
    BrandGroup {
        title: "Lighting Solutions",
        brands: &["Neekan Lites", "Ledlum", "Philips", "OSRAM"],
    },
    BrandGroup {
        title: "Switches & Accessories",
        brands: &["Schneider", "Norisys", "Vihan", "GreatWhite", "GM Modular", "Legrand"],
    },
    BrandGroup {
        title: "Premium Fans",
        brands: &["Orient Electric", "Indo", "Ecolink", "Kuhl Fans"],
    },
];

fn brand_count_label(count: usize) -> String {
    if count == 1 {
        "1 brand".to_string()
    } else {
        format!("{} brands", count)
    }
}

#[component]
pub fn AuthorizedBrands() -> impl IntoView {
    view! {
        <section class="brands">
            <div class="container">
                <SectionHeader
                    eyebrow="Trusted Partners"
                    title="Authorized Brand Dealer"
                    subtitle="We are proud authorized dealers of India's most trusted electrical brands, ensuring genuine products with full manufacturer warranty."
                />
                <div class="brands__grid">
                    {GROUPS.iter().enumerate().map(|(group_index, group)| view! {
                        <div class="brands__group">
                            <div class="brands__group-header">
                                <h3>{group.title}</h3>
                                <p class="brands__count">{brand_count_label(group.brands.len())}</p>
                            </div>
                            <ul class="brands__list">
                                {group.brands.iter().enumerate().map(|(i, brand)| {
                                    let class = if group_index == 0 && i == 0 {
                                        "brands__item brands__item--highlight"
                                    } else {
                                        "brands__item"
                                    };
                                    view! { <li class=class>{*brand}</li> }
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_group_lists_brands() {
        assert!(GROUPS.iter().all(|g| !g.brands.is_empty()));
        assert_eq!(brand_count_label(6), "6 brands");
    }
}
