pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-6";
pub const PAGE_GRID: &str = "max-w-7xl mx-auto grid gap-6 lg:grid-cols-[1.4fr_0.6fr]";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_MUTED: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const LIST_ROW: &str = "flex items-center justify-between text-sm border-b border-gray-200/60 dark:border-gray-700/60 pb-2";
pub const BADGE: &str = "inline-flex items-center px-3 py-1 rounded-full text-xs font-semibold";
