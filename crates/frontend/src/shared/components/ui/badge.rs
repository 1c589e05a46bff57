use contracts::domain::a002_inquiry::aggregate::InquiryStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

pub fn status_variant(status: InquiryStatus) -> &'static str {
    match status {
        InquiryStatus::Pending => "warning",
        InquiryStatus::Contacted => "primary",
        InquiryStatus::Quoted => "success",
        InquiryStatus::Closed => "neutral",
    }
}

/// Badge showing the processing status of a quote request
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<InquiryStatus>) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--status badge--{}", status_variant(status.get()))>
            {move || status.get().display_name()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_distinct_colour() {
        let mut variants: Vec<_> = InquiryStatus::ALL.iter().map(|s| status_variant(*s)).collect();
        variants.sort();
        variants.dedup();
        assert_eq!(variants.len(), InquiryStatus::ALL.len());
    }
}
