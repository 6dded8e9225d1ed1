mod manifold;
mod matching;
mod small_areas;
