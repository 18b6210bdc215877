//! 历史记录上下翻阅

/// 历史游标
///
/// 基于创建时的快照，初始位置在最新条目之后（即空白输入行）。
#[derive(Debug, Clone)]
pub struct HistoryCursor {
    entries: Vec<String>,
    position: usize,
}

impl HistoryCursor {
    pub fn new(entries: Vec<String>) -> Self {
        let position = entries.len();
        Self { entries, position }
    }

    /// 向更旧的条目移动，到达最旧条目后停留不动
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    /// 向更新的条目移动，越过最新条目时回到空白输入行并返回 `None`
    pub fn next(&mut self) -> Option<&str> {
        if self.position < self.entries.len() {
            self.position += 1;
        }
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.position).map(String::as_str)
    }

    pub fn reset(&mut self) {
        self.position = self.entries.len();
    }

    pub fn is_at_input_line(&self) -> bool {
        self.position == self.entries.len()
    }
}
