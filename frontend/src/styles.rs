pub const CONTAINER_LG: &str = "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-10";
pub const CONTAINER_TEXT: &str = "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-8";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-800/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_CONTENT: &str = "h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-amber-500 dark:hover:text-amber-400 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-3";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-amber-500 dark:hover:text-amber-400 rounded-lg transition-colors duration-200";
pub const SELECT: &str = "rounded-lg border-0 bg-gray-100 dark:bg-gray-700 py-1.5 pl-3 pr-8 text-sm text-gray-900 dark:text-white ring-1 ring-inset ring-gray-300 dark:ring-gray-600 focus:ring-2 focus:ring-amber-500";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const TEXT_H1: &str = "text-4xl md:text-5xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300 leading-relaxed";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const LINK: &str = "text-amber-600 dark:text-amber-400 hover:text-amber-700 dark:hover:text-amber-300 transition-colors duration-200";
pub const FOOTER: &str = "w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-t border-gray-200/50 dark:border-gray-700/50";
pub const FOOTER_LINK: &str = "text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-amber-500 dark:hover:text-amber-400 transition-colors duration-200";

// Hero section
pub const HERO_CONTENT: &str = "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 pt-12 pb-6 text-center";
pub const HERO_TITLE: &str = "text-5xl md:text-6xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-amber-400 to-orange-500 mb-4";
pub const HERO_TEXT: &str = "text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto";

// Wheel
pub const WHEEL_CONTAINER: &str = "relative w-80 h-80 md:w-96 md:h-96";
pub const WHEEL_POINTER: &str = "absolute top-0 left-1/2 -translate-x-1/2 -translate-y-2 z-10 w-0 h-0 border-l-[16px] border-l-transparent border-r-[16px] border-r-transparent border-t-[28px] border-t-[#FDB813]";
pub const WHEEL_FACE: &str = "absolute inset-0 rounded-full overflow-hidden shadow-2xl border-8 border-white dark:border-gray-200";
pub const WHEEL_HUB: &str = "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 z-10 w-16 h-16 rounded-full bg-white shadow-xl";
pub const WHEEL_LABEL: &str = "absolute top-1/2 -translate-y-1/2 text-white text-5xl font-bold select-none";
pub const SPIN_BUTTON: &str = "inline-flex items-center justify-center px-12 py-4 text-xl font-bold text-white rounded-full bg-gradient-to-r from-[#FDB813] to-[#FF9800] shadow-xl hover:shadow-2xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const HISTORY_CHIP: &str = "px-3 py-1 rounded-full text-sm font-semibold text-white";

// FAQ
pub const FAQ_ITEM: &str = "bg-white dark:bg-gray-800 rounded-lg shadow p-4";
pub const FAQ_QUESTION: &str = "w-full flex items-center justify-between text-left font-semibold text-gray-900 dark:text-white";
