use crate::config::AppConfig;
use crate::crm::CrmClient;
use crate::domain::{Pager, Property};
use crate::errors::ServerError;
use crate::pdf::brochure::{brochure_filename, render_brochure};
use crate::pdf::images::ImageFetcher;
use crate::responses::{html_response, pdf_response, see_other, ResultResp};
use crate::share::build_share_link;
use crate::templates::notice::Notice;
use crate::templates::pages::listings::{ListingsVm, RowVm};
use crate::templates::pages::listings_page;
use astra::Request;
use chrono::Utc;
use std::collections::HashMap;

/// Everything a request handler needs, built once at startup and shared
/// across worker threads.
pub struct AppCtx {
    pub config: AppConfig,
    pub crm: CrmClient,
    pub images: ImageFetcher,
}

pub fn handle(req: Request, ctx: &AppCtx) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => listings(&req, ctx),
        ("POST", "/delete") => delete(&req, ctx),
        ("GET", "/download-pdf") => download_pdf(&req, ctx),
        _ => Err(ServerError::NotFound),
    }
}

fn listings(req: &Request, ctx: &AppCtx) -> ResultResp {
    let params = parse_query(req);
    let page = params
        .get("page")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(1);
    let notice = params.get("msg").and_then(|c| Notice::from_code(c));

    let mut pager = Pager::new(page, ctx.config.page_size, 0);

    // A remote failure still renders the page: zero rows plus a banner,
    // so the operator can see the tool is up even when the CRM is not.
    let (items, notice) = match ctx.crm.list_items(pager.start(), pager.page_size) {
        Ok(page_of) => {
            pager.total = page_of.total;
            (page_of.items, notice)
        }
        Err(e) => {
            eprintln!("❌ Failed to list items: {e}");
            (Vec::new(), Some(Notice::LoadFailed))
        }
    };
    let rows = items
        .into_iter()
        .map(|item| {
            let prop = Property::from_item(item);
            let link = build_share_link(&ctx.config.public_origin, prop.id);
            RowVm::from_property(&prop, link)
        })
        .collect();

    html_response(listings_page(&ListingsVm { rows, pager, notice }))
}

fn delete(req: &Request, ctx: &AppCtx) -> ResultResp {
    let params = parse_query(req);
    let id = require_id(&params)?;
    let page = params
        .get("page")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(1);

    let msg = match ctx.crm.delete_item(id) {
        Ok(()) => {
            println!("✅ Deleted item {id}");
            Notice::Deleted
        }
        Err(e) => {
            eprintln!("❌ Failed to delete item {id}: {e}");
            Notice::DeleteFailed
        }
    };

    see_other(&format!("/?page={}&msg={}", page, msg.code()))
}

fn download_pdf(req: &Request, ctx: &AppCtx) -> ResultResp {
    let params = parse_query(req);
    let id = require_id(&params)?;

    let item = ctx.crm.get_item(id)?;
    let prop = Property::from_item(item);

    println!("📄 Rendering brochure for item {id}");
    let bytes = render_brochure(
        &prop,
        &ctx.images,
        &ctx.config.brand,
        &ctx.config.header_image_url,
    )?;

    let filename = brochure_filename(&ctx.config.brand, id, Utc::now());
    pdf_response(bytes, &filename)
}

fn require_id(params: &HashMap<String, String>) -> Result<i64, ServerError> {
    params
        .get("id")
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| ServerError::BadRequest("missing or invalid id".to_string()))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
