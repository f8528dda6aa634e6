/// 整页跳转（Hard Navigation）
///
/// 与路由器的软导航（pushState）不同，整页跳转会丢弃全部内存状态并重新加载应用，
/// 用于登出和进入个人主页这类完整的会话边界动作。
pub trait Navigator {
    fn hard_navigate(&self, path: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn hard_navigate(&self, path: &str) {
        (**self).hard_navigate(path)
    }
}
