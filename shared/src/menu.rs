//! 账户菜单动作
//!
//! 菜单只能产生封闭枚举中的动作，分发器对其穷尽匹配，
//! 不存在“未知键被静默忽略”的路径。

use std::fmt::Display;
use std::str::FromStr;

use log::info;

use crate::PATH_PROFILE;
use crate::error::GateError;
use crate::navigation::Navigator;
use crate::session::{Session, SessionHolder};
use crate::storage::KeyValueStore;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NavigateProfile,
    Logout,
}

impl MenuAction {
    /// 菜单中的全部动作，按显示顺序排列
    pub const ALL: [MenuAction; 2] = [Self::NavigateProfile, Self::Logout];

    pub fn key(&self) -> &'static str {
        match self {
            Self::NavigateProfile => "navigate-profile",
            Self::Logout => "logout",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NavigateProfile => "个人主页",
            Self::Logout => "退出",
        }
    }
}

impl Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for MenuAction {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.key() == s)
            .ok_or_else(|| GateError::InvalidMenuAction(s.to_string()))
    }
}

/// 分发一个菜单动作
///
/// 两个动作都是整页跳转：进入个人主页等同于打开新的顶层页面，
/// 登出则交给 [`SessionHolder::clear`] 完成完整的会话拆除。
pub fn dispatch<S: KeyValueStore, N: Navigator>(
    action: MenuAction,
    holder: &SessionHolder<S, N>,
    session: &mut Session,
) {
    info!("[Menu] Dispatching {action}");
    match action {
        MenuAction::NavigateProfile => holder.navigator().hard_navigate(PATH_PROFILE),
        MenuAction::Logout => holder.clear(session),
    }
}
