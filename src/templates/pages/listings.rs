use crate::crm::labels;
use crate::domain::{Pager, Property};
use crate::templates::components::notice::{notice_banner, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListingsVm {
    pub rows: Vec<RowVm>,
    pub pager: Pager,
    pub notice: Option<Notice>,
}

pub struct RowVm {
    pub id: i64,
    pub title: String,
    pub emirate: &'static str,
    pub building_name: String,
    pub address: String,
    pub property_type: String,
    pub listing_type: &'static str,
    pub status: &'static str,
    pub status_code: Option<i64>,
    pub price: String,
    pub share_link: String,
}

impl RowVm {
    pub fn from_property(prop: &Property, share_link: String) -> Self {
        Self {
            id: prop.id,
            title: prop.title.clone().unwrap_or_default(),
            emirate: labels::map_emirate(prop.emirate),
            building_name: prop.building_name.clone().unwrap_or_default(),
            address: prop.address.clone().unwrap_or_default(),
            property_type: prop.property_type.clone().unwrap_or_default(),
            listing_type: labels::map_listing_type(prop.listing_type),
            status: labels::map_status(prop.status),
            status_code: prop.status,
            price: prop.price.clone().unwrap_or_default(),
            share_link,
        }
    }

    fn status_class(&self) -> &'static str {
        match self.status_code {
            Some(labels::STATUS_VACANT) => "badge vacant",
            Some(labels::STATUS_RENTED) => "badge rented",
            _ => "badge",
        }
    }
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "Mondus - Owner's DB PDF Mapping",
        html! {
            main {
                div class="panel" {
                    @if let Some(n) = vm.notice {
                        (notice_banner(n))
                    }

                    table {
                        thead {
                            tr {
                                th { "ID" }
                                th { "Title" }
                                th { "Emirate" }
                                th { "Building Name" }
                                th { "Address" }
                                th { "Property Type" }
                                th { "Listing Type" }
                                th { "Status" }
                                th { "Asking/Renting Price" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            @for row in &vm.rows {
                                tr {
                                    td { (row.id) }
                                    td { (row.title) }
                                    td { (row.emirate) }
                                    td { (row.building_name) }
                                    td { (row.address) }
                                    td { (row.property_type) }
                                    td { (row.listing_type) }
                                    td {
                                        span class=(row.status_class()) { (row.status) }
                                    }
                                    td { (row.price) }
                                    td class="actions" {
                                        a href=(format!("/download-pdf?id={}", row.id)) { "Download PDF" }
                                        button
                                            type="button"
                                            onclick=(format!("navigator.clipboard.writeText('{}')", row.share_link))
                                        { "Copy Link" }
                                        form
                                            action=(format!("/delete?id={}&page={}", row.id, vm.pager.page))
                                            method="post"
                                            onsubmit="return confirm('Are you sure you want to delete this item?')"
                                        {
                                            button type="submit" { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    (pagination(&vm.pager))
                }
            }
        },
    )
}

fn pagination(pager: &Pager) -> Markup {
    html! {
        div class="pagination" {
            div {
                "Showing " (pager.showing_from()) " to " (pager.showing_to())
                " of " (pager.total) " items"
            }
            div {
                @if pager.has_prev() {
                    a class="page-btn" href=(format!("/?page={}", pager.page - 1)) { "Prev" }
                } @else {
                    span class="page-btn disabled" { "Prev" }
                }
                " "
                @if pager.has_next() {
                    a class="page-btn" href=(format!("/?page={}", pager.page + 1)) { "Next" }
                } @else {
                    span class="page-btn disabled" { "Next" }
                }
            }
        }
    }
}
