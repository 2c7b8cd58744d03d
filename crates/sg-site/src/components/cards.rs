//! Card components for marketing pages

use leptos::*;
use sg_core::fixtures::{BUSINESS, PROJECTS, SERVICES};
use sg_core::{Project, Service, Testimonial};

use super::FallbackImage;

#[component]
pub fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 flex flex-col">
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{service.title}</h3>
            <p class="text-gray-600 mb-4">{service.description}</p>
            <ul class="space-y-2 text-sm text-gray-700 mt-auto">
                {service.features.iter().map(|feature| view! {
                    <li class="flex items-center">
                        <span class="text-amber-500 mr-2">"✓"</span>
                        {*feature}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn ProjectCard<F>(project: &'static Project, on_open: F) -> impl IntoView
where
    F: Fn(&'static str) + 'static,
{
    let cover = project.cover_image().unwrap_or_default();
    let photos = project.images.len();

    view! {
        <button
            type="button"
            class="group text-left bg-white rounded-xl shadow hover:shadow-lg transition overflow-hidden focus:outline-none focus:ring-2 focus:ring-amber-500"
            aria-label=format!("View {} photos of {}", photos, project.title)
            on:click=move |_| on_open(project.id)
        >
            <div class="aspect-[4/3] overflow-hidden bg-gray-100">
                <FallbackImage
                    src=cover
                    alt=project.title
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform"
                />
            </div>
            <div class="p-4">
                <span class="text-xs uppercase tracking-wide text-amber-600">{project.category.label()}</span>
                <h3 class="font-semibold text-gray-900 mt-1">{project.title}</h3>
                {project.location.map(|location| view! {
                    <p class="text-sm text-gray-500 mt-1">{location}</p>
                })}
            </div>
        </button>
    }
}

#[component]
pub fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let stars = "★".repeat(testimonial.rating as usize);
    let author = match testimonial.company {
        Some(company) => format!("{}, {}", testimonial.name, company),
        None => testimonial.name.to_string(),
    };

    view! {
        <figure class="bg-white rounded-xl shadow-lg p-8 h-full">
            <div class="text-amber-500 mb-4" aria-label=format!("{} out of 5 stars", testimonial.rating)>
                {stars}
            </div>
            <blockquote class="text-gray-700 italic mb-6">"\""{testimonial.content}"\""</blockquote>
            <figcaption class="font-semibold text-gray-900">{author}</figcaption>
        </figure>
    }
}

/// One reason to hire us, shown as a marker beside a short paragraph
pub struct SellingPoint {
    pub marker: &'static str,
    pub heading: &'static str,
    pub detail: &'static str,
}

#[component]
pub fn SellingPoints(points: &'static [SellingPoint]) -> impl IntoView {
    view! {
        <ul class="grid md:grid-cols-2 gap-x-10 gap-y-8 max-w-4xl mx-auto">
            {points.iter().map(|point| view! {
                <li class="flex gap-4">
                    <span class="shrink-0 w-12 h-12 rounded-full border-2 border-amber-400 grid place-items-center text-xl" aria-hidden="true">
                        {point.marker}
                    </span>
                    <div>
                        <h3 class="font-semibold text-gray-900">{point.heading}</h3>
                        <p class="text-sm text-gray-600 mt-1">{point.detail}</p>
                    </div>
                </li>
            }).collect_view()}
        </ul>
    }
}

/// Headline figure with its caption
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub figure: String,
    pub caption: &'static str,
}

/// Figures derived from the business and catalogue fixtures, most telling first
pub fn business_stats() -> Vec<Stat> {
    let business = &*BUSINESS;
    vec![
        Stat {
            figure: format!("{}+", business.years_of_experience),
            caption: "Years of experience",
        },
        Stat {
            figure: PROJECTS.len().to_string(),
            caption: "Showcased projects",
        },
        Stat {
            figure: SERVICES.len().to_string(),
            caption: "Services offered",
        },
        Stat {
            figure: business.founding_year.to_string(),
            caption: "Established",
        },
    ]
}

#[component]
pub fn StatsBand(stats: Vec<Stat>, #[prop(optional)] on_dark: bool) -> impl IntoView {
    let caption_class = if on_dark { "text-sm text-slate-300" } else { "text-sm text-gray-500" };
    view! {
        <dl class="grid grid-cols-2 md:grid-flow-col md:auto-cols-fr gap-8 text-center">
            {stats.into_iter().map(|stat| view! {
                <div class="flex flex-col-reverse gap-1">
                    <dt class=caption_class>{stat.caption}</dt>
                    <dd class="text-4xl font-bold text-amber-500">{stat.figure}</dd>
                </div>
            }).collect_view()}
        </dl>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_stats_track_fixtures() {
        let stats = business_stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].figure, format!("{}+", BUSINESS.years_of_experience));
        assert_eq!(stats[1].figure, PROJECTS.len().to_string());
        assert_eq!(stats[2].figure, SERVICES.len().to_string());
        assert_eq!(stats[3].caption, "Established");
    }
}
