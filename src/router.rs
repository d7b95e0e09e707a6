use crate::catalog::{CatalogSource, TermQuery};
use crate::config::TermDefaults;
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::state::{load_course_page, load_subject_page, CoursePage, PageView, SubjectPage};
use crate::templates::pages;
use astra::Request;
use maud::Markup;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared by every worker thread of the server.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogSource>,
    pub term: TermDefaults,
}

impl AppContext {
    pub fn new(catalog: Arc<dyn CatalogSource>, term: TermDefaults) -> Self {
        Self { catalog, term }
    }
}

pub fn handle(req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    match (method, path) {
        ("GET", "/subject") => subject(ctx, &params),
        ("GET", "/course") => course(ctx, &params),
        _ => Err(ServerError::NotFound),
    }
}

fn subject(ctx: &AppContext, params: &HashMap<String, String>) -> ResultResp {
    let query = term_query(ctx, params)?;

    let page = Mutex::new(SubjectPage::new());
    load_subject_page(ctx.catalog.as_ref(), &page, query);
    let view = page
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .view();

    render(view, pages::subject_page, "/")
}

fn course(ctx: &AppContext, params: &HashMap<String, String>) -> ResultResp {
    let term = term_query(ctx, params)?;
    let course_id = required(params, "courseid")?;
    let back_link = term.subject_link();

    let page = Mutex::new(CoursePage::new());
    load_course_page(ctx.catalog.as_ref(), &page, term.course(course_id));
    let view = page
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .view();

    render(view, pages::course_page, &back_link)
}

fn render<V>(view: PageView<V>, page: fn(&V) -> Markup, back_link: &str) -> ResultResp {
    match view {
        PageView::Ready(vm) => html_response(page(&vm)),
        PageView::Loading => html_response(pages::loading_page()),
        PageView::NotFound => html_response_with_status(404, pages::not_found_page(back_link)),
        PageView::Unavailable => html_response(pages::unavailable_page()),
    }
}

fn term_query(ctx: &AppContext, params: &HashMap<String, String>) -> Result<TermQuery, ServerError> {
    let school = required(params, "school")?;
    let subject = required(params, "subject")?;

    let year = match params.get("year") {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("invalid year {raw:?}")))?,
        None => ctx.term.year,
    };
    let semester = params
        .get("semester")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(ctx.term.semester.as_str());

    Ok(TermQuery::new(year, semester, school, subject))
}

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ServerError> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing {key}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
