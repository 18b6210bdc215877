/*!
 * 观察者注册表
 *
 * 通知先进入待发送队列，再按入队顺序逐条发送；回调在内部锁释放后同步调用，
 * 回调内部可以再次订阅、取消订阅或修改被观察的值。嵌套产生的通知排在队尾，
 * 每个观察者最后收到的总是最新的值
 */

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// 订阅标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// 待发送的通知队列
struct Dispatch<T: ?Sized> {
    queue: VecDeque<(Callback<T>, Arc<T>)>,
    draining: bool,
}

pub struct ObserverList<T: ?Sized> {
    next_id: AtomicU64,
    observers: Mutex<Vec<(SubscriptionId, Callback<T>)>>,
    dispatch: Mutex<Dispatch<T>>,
}

/// 发送过程中回调 panic 时复位发送标记
struct DrainGuard<'a, T: ?Sized> {
    dispatch: &'a Mutex<Dispatch<T>>,
    finished: bool,
}

impl<T: ?Sized> Drop for DrainGuard<'_, T> {
    fn drop(&mut self) {
        if !self.finished {
            self.dispatch.lock().draining = false;
        }
    }
}

impl<T: ?Sized> ObserverList<T> {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            observers: Mutex::new(Vec::new()),
            dispatch: Mutex::new(Dispatch {
                queue: VecDeque::new(),
                draining: false,
            }),
        }
    }

    pub fn register<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let callback: Callback<T> = Arc::new(observer);
        self.observers.lock().push((id, callback));
        id
    }

    pub fn unregister(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.lock().is_empty()
    }

    /// 为当前所有观察者排入一条通知，不立即发送
    ///
    /// 入队顺序即发送顺序，调用方需要在与修改值相同的临界区内入队。
    pub fn enqueue(&self, value: Arc<T>) {
        let observers: Vec<Callback<T>> = self
            .observers
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        let mut dispatch = self.dispatch.lock();
        for callback in observers {
            dispatch.queue.push_back((callback, Arc::clone(&value)));
        }
    }

    /// 发送队列中的通知
    ///
    /// 已有调用方在发送时直接返回，新入队的通知由正在发送的调用方送出。
    pub fn drain(&self) {
        {
            let mut dispatch = self.dispatch.lock();
            if dispatch.draining {
                return;
            }
            dispatch.draining = true;
        }
        let mut guard = DrainGuard {
            dispatch: &self.dispatch,
            finished: false,
        };

        loop {
            // 队列为空与复位标记在同一次加锁内完成，避免并发入队的通知无人发送
            let next = {
                let mut dispatch = self.dispatch.lock();
                let next = dispatch.queue.pop_front();
                if next.is_none() {
                    dispatch.draining = false;
                }
                next
            };
            match next {
                Some((callback, value)) => callback(&*value),
                None => break,
            }
        }
        guard.finished = true;
    }

    /// 通知所有观察者
    pub fn notify(&self, value: Arc<T>) {
        self.enqueue(value);
        self.drain();
    }
}

impl<T: ?Sized> Default for ObserverList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for ObserverList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.len())
            .finish()
    }
}
