use crate::directory::{DataSource, Directory};
use crate::domain::pagination::{paginate, PAGE_SIZE};
use crate::domain::{BrowseState, ListingRecord};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, json_response, text_response};
use crate::templates::pages::{browse_page, home_page, profile_page, BrowseVm};
use astra::Request;
use serde::Serialize;

#[derive(Serialize)]
struct BrowseJson<'a> {
    page: usize,
    total_pages: usize,
    total: usize,
    source: DataSource,
    items: &'a [&'a ListingRecord],
}

pub fn handle(req: Request, directory: &Directory) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();

    match (method, path) {
        ("GET", "/") => html_response(home_page(directory.records().len())),
        ("GET", "/health") => text_response("ok"),
        ("GET", "/lawyers") | ("GET", "/lawyers/") => browse(directory, query),
        ("GET", "/lawyers.json") => browse_json(directory, query),
        ("GET", p) if p.starts_with("/lawyers/") => profile(directory, &p["/lawyers/".len()..]),
        _ => Err(ServerError::NotFound),
    }
}

fn browse(directory: &Directory, query: Option<&str>) -> ResultResp {
    let state = BrowseState::from_query(query);
    let records = directory.records();
    let filtered = state.filter().apply(&records);

    let vm = BrowseVm {
        state: &state,
        page: paginate(&filtered, state.page(), PAGE_SIZE),
    };

    html_response(browse_page(&vm))
}

fn browse_json(directory: &Directory, query: Option<&str>) -> ResultResp {
    let state = BrowseState::from_query(query);
    let records = directory.records();
    let filtered = state.filter().apply(&records);
    let page = paginate(&filtered, state.page(), PAGE_SIZE);

    json_response(&BrowseJson {
        page: page.current,
        total_pages: page.total_pages,
        total: page.total_items,
        source: directory.source(),
        items: page.items,
    })
}

fn profile(directory: &Directory, id: &str) -> ResultResp {
    let id = id.trim_end_matches('/');
    if id.is_empty() || id.contains('/') {
        return Err(ServerError::NotFound);
    }

    let record = directory.find(id).ok_or(ServerError::NotFound)?;
    html_response(profile_page(&record))
}
