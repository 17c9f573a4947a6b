//! 目录页模态框状态机
//!
//! 用显式状态机代替零散的布尔开关：{空闲, 新增, 查看, 编辑}。

use crate::app::product::model::ProductId;

/// 当前打开的模态框
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Idle,
    Adding,
    Viewing(ProductId),
    Editing(ProductId),
}

/// 目录页的界面状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogUi {
    state: ModalState,
}

impl CatalogUi {
    pub fn new() -> Self {
        Self {
            state: ModalState::Idle,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// 当前选中的产品（查看或编辑时）
    pub fn selected(&self) -> Option<ProductId> {
        match self.state {
            ModalState::Viewing(id) | ModalState::Editing(id) => Some(id),
            _ => None,
        }
    }

    // 用户动作
    pub fn open_add(&mut self) {
        self.state = ModalState::Adding;
    }

    pub fn open_view(&mut self, id: ProductId) {
        self.state = ModalState::Viewing(id);
    }

    pub fn open_edit(&mut self, id: ProductId) {
        self.state = ModalState::Editing(id);
    }

    /// 取消并关闭当前模态框
    pub fn dismiss(&mut self) {
        self.state = ModalState::Idle;
    }

    /// 服务端确认成功后关闭模态框
    pub fn complete(&mut self) {
        self.state = ModalState::Idle;
    }
}

impl Default for CatalogUi {
    fn default() -> Self {
        Self::new()
    }
}
