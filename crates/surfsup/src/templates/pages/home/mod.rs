use maud::{html, Markup};

use crate::templates::layouts::{base, PageConfig};

struct RouteInfo {
    path: &'static str,
    description: &'static str,
}

const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        path: "/api/v1.0/precipitation",
        description: "Precipitation for the last 12 months of the dataset, keyed by date",
    },
    RouteInfo {
        path: "/api/v1.0/stations",
        description: "Every weather station in the dataset",
    },
    RouteInfo {
        path: "/api/v1.0/tobs",
        description: "Last 12 months of temperature observations at the most active station",
    },
    RouteInfo {
        path: "/api/v1.0/{start}",
        description: "Lowest, highest and average temperature from a start date (YYYY-MM-DD)",
    },
    RouteInfo {
        path: "/api/v1.0/{start}/{end}",
        description: "Lowest, highest and average temperature between two dates (YYYY-MM-DD/YYYY-MM-DD)",
    },
];

pub fn home_page(api_base: &str) -> Markup {
    let config = PageConfig {
        title: "Surf's Up: Honolulu Climate",
        api_base,
    };

    base(&config, content(api_base))
}

fn content(api_base: &str) -> Markup {
    html! {
        div class="content" {
            p {
                "Planning a long holiday in Honolulu, Hawaii? These pages give a climate "
                "analysis of the area, computed from the station observations on file."
            }
            p class="is-size-7" {
                "Recent windows cover the twelve months before the newest observation in the dataset."
            }
        }

        table class="table is-fullwidth is-striped" {
            thead {
                tr {
                    th { "Route" }
                    th { "Description" }
                }
            }
            tbody {
                @for route in ROUTES {
                    tr {
                        td {
                            @if route.path.contains('{') {
                                code { (route.path) }
                            } @else {
                                a href=(format!("{}{}", api_base, route.path)) {
                                    code { (route.path) }
                                }
                            }
                        }
                        td { (route.description) }
                    }
                }
            }
        }
    }
}
