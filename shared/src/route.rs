//! 路由定义模块 - 领域模型
//!
//! 数据驱动的路由表：path → 是否需要认证 → 视图。
//! 所有访问控制都由唯一的 [`resolve`] 函数根据这张表决定，
//! 各个视图自身不再重复做认证判断。

use std::fmt::Display;

use crate::PATH_LOGIN;
use crate::error::{GateError, GateResult};
use crate::session::Session;

#[cfg(test)]
mod tests;

/// 可渲染的视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    /// 图书数据管理（主数据视图）
    Books,
    BooksByDecadeChart,
    BooksByYearChart,
    BooksByPublisherChart,
    ScatterPlotByYearAndRating,
    WordCloud,
    Dialogue,
    Profile,
}

impl View {
    /// 视图在导航中显示的名称
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "登录",
            Self::Register => "注册",
            Self::Books => "图书数据管理",
            Self::BooksByDecadeChart => "数量面积图",
            Self::BooksByYearChart => "曲线面积图",
            Self::BooksByPublisherChart => "数据统计",
            Self::ScatterPlotByYearAndRating => "评分分析",
            Self::WordCloud => "词云分析",
            Self::Dialogue => "对话",
            Self::Profile => "个人主页",
        }
    }

    /// 视图在路由表中注册的路径
    pub fn path(&self) -> &'static str {
        ROUTE_TABLE
            .iter()
            .find(|entry| entry.view == *self)
            .map(|entry| entry.path)
            .unwrap_or(PATH_LOGIN)
    }
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// 路由表中的一行，构建期固定，运行期不可修改
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    /// **核心守卫属性：该路由是否需要认证**
    pub requires_auth: bool,
    pub view: View,
}

impl RouteEntry {
    const fn open(path: &'static str, view: View) -> Self {
        Self {
            path,
            requires_auth: false,
            view,
        }
    }

    const fn protected(path: &'static str, view: View) -> Self {
        Self {
            path,
            requires_auth: true,
            view,
        }
    }

    /// 按路径查找路由，路径会先经过 [`normalize_path`]
    pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
        let path = normalize_path(path);
        ROUTE_TABLE.iter().find(|entry| entry.path == path)
    }
}

/// 应用的全部路由
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry::open("/login", View::Login),
    RouteEntry::open("/register", View::Register),
    RouteEntry::protected("/", View::Books),
    RouteEntry::protected("/books-by-decade", View::BooksByDecadeChart),
    RouteEntry::protected("/books-by-year", View::BooksByYearChart),
    RouteEntry::protected("/books-by-publisher", View::BooksByPublisherChart),
    RouteEntry::protected(
        "/scatter-plot-by-year-and-rating",
        View::ScatterPlotByYearAndRating,
    ),
    RouteEntry::protected("/word-cloud", View::WordCloud),
    RouteEntry::protected("/dialogue", View::Dialogue),
    RouteEntry::protected("/profile", View::Profile),
];

/// 守卫的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDecision {
    Render(View),
    Redirect(&'static str),
}

impl RenderDecision {
    /// 判定结果对应的地址栏路径
    ///
    /// 渲染时保留请求的路径；重定向时显示重定向目标。
    pub fn location<'a>(&self, requested: &'a str) -> &'a str {
        match self {
            Self::Render(_) => requested,
            Self::Redirect(target) => target,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// 去掉查询串、片段和末尾的 `/`
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// **核心守卫逻辑**
///
/// 公开路由总是渲染；受保护路由仅在已认证时渲染，否则重定向到登录页。
/// 对相同的 `(path, session)` 结果恒定。
pub fn resolve(path: &str, session: &Session) -> GateResult<RenderDecision> {
    let entry =
        RouteEntry::lookup(path).ok_or_else(|| GateError::UnknownRoute(path.to_string()))?;

    if entry.requires_auth && !session.is_authenticated() {
        return Ok(RenderDecision::Redirect(PATH_LOGIN));
    }
    Ok(RenderDecision::Render(entry.view))
}
