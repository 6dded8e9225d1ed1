mod approx;
mod convex;
